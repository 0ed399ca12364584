//! One-line feedback under the form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_WARNING, TEXT_MUTED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A message and how loudly to show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::Error, text)
    }

    fn with_kind(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Renders an optional [`StatusMessage`]; empty when there is none
pub struct StatusLine<'a> {
    message: Option<&'a StatusMessage>,
}

impl<'a> StatusLine<'a> {
    pub fn new(message: Option<&'a StatusMessage>) -> Self {
        Self { message }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let line = match self.message {
            Some(message) => {
                let (icon, color) = match message.kind {
                    StatusKind::Info => ("·", TEXT_MUTED),
                    StatusKind::Success => ("✓", ACCENT_PRIMARY),
                    StatusKind::Warning => ("!", ACCENT_WARNING),
                    StatusKind::Error => ("✗", ACCENT_ERROR),
                };
                Line::from(Span::styled(
                    format!("  {icon} {}", message.text),
                    Style::default().fg(color),
                ))
            }
            None => Line::default(),
        };

        Paragraph::new(line).render(area, buf);
    }
}
