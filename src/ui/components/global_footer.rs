use ratatui::{buffer::Buffer, layout::Rect};

use super::key_hints::{render_key_hints, KeyHintBarStyle};
use crate::ui::events::Focus;

/// Context for determining which footer hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterContext {
    /// Typing a new recipe
    #[default]
    Form,
    /// Form holds an existing recipe
    Editing,
    /// Navigating the recipe list
    List,
}

impl FooterContext {
    pub fn from_state(focus: Focus, editing: bool) -> Self {
        match (focus, editing) {
            (Focus::List, _) => FooterContext::List,
            (Focus::Field(_), true) => FooterContext::Editing,
            (Focus::Field(_), false) => FooterContext::Form,
        }
    }
}

/// Footer showing keyboard shortcuts for the current context
pub struct GlobalFooter {
    hints: &'static [(&'static str, &'static str)],
}

const FORM_HINTS: &[(&str, &str)] = &[
    ("enter", "add"),
    ("tab", "next field"),
    ("M-enter", "newline"),
    ("C-q", "quit"),
];

const EDITING_HINTS: &[(&str, &str)] = &[
    ("enter", "update"),
    ("tab", "next field"),
    ("esc", "cancel edit"),
    ("C-q", "quit"),
];

const LIST_HINTS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("e", "edit"),
    ("d", "delete"),
    ("esc", "form"),
    ("C-q", "quit"),
];

impl GlobalFooter {
    pub fn for_context(context: FooterContext) -> Self {
        Self {
            hints: match context {
                FooterContext::Form => FORM_HINTS,
                FooterContext::Editing => EDITING_HINTS,
                FooterContext::List => LIST_HINTS,
            },
        }
    }

    pub fn from_state(focus: Focus, editing: bool) -> Self {
        Self::for_context(FooterContext::from_state(focus, editing))
    }

    pub fn hints(&self) -> &[(&'static str, &'static str)] {
        self.hints
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(area, buf, self.hints, KeyHintBarStyle::footer());
    }
}

impl Default for GlobalFooter {
    fn default() -> Self {
        Self::for_context(FooterContext::default())
    }
}
