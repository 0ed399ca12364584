//! Key hint bar rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, FOOTER_BG, KEY_HINT_BG, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};

#[derive(Debug, Clone, Copy)]
pub struct KeyHintBarStyle {
    pub key_style: Style,
    pub action_style: Style,
    pub separator: Option<(&'static str, Style)>,
    pub item_gap: &'static str,
    pub key_padding: &'static str,
    pub alignment: Alignment,
    pub background: Option<Color>,
}

impl KeyHintBarStyle {
    /// Centered hints separated by bars, used under the form
    pub fn inline() -> Self {
        Self {
            key_style: Style::default().fg(ACCENT_PRIMARY),
            action_style: Style::default().fg(TEXT_SECONDARY),
            separator: Some((" │ ", Style::default().fg(TEXT_FAINT))),
            item_gap: "",
            key_padding: "",
            alignment: Alignment::Center,
            background: None,
        }
    }

    /// Boxed keys on the footer background
    pub fn footer() -> Self {
        Self {
            key_style: Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
            action_style: Style::default().fg(TEXT_MUTED),
            separator: None,
            item_gap: "   ",
            key_padding: " ",
            alignment: Alignment::Left,
            background: Some(FOOTER_BG),
        }
    }
}

/// Build the spans for `hints` without rendering them
pub fn key_hint_line<'a>(hints: &[(&'a str, &'a str)], style: KeyHintBarStyle) -> Line<'a> {
    let mut spans = vec![Span::raw(style.key_padding)];

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            match style.separator {
                Some((sep, sep_style)) => spans.push(Span::styled(sep, sep_style)),
                None => spans.push(Span::raw(style.item_gap)),
            }
        }
        spans.push(Span::styled(
            format!("{pad}{key}{pad}", pad = style.key_padding),
            style.key_style,
        ));
        spans.push(Span::styled(format!(" {action}"), style.action_style));
    }

    Line::from(spans)
}

pub fn render_key_hints(
    area: Rect,
    buf: &mut Buffer,
    hints: &[(&str, &str)],
    style: KeyHintBarStyle,
) {
    let mut paragraph = Paragraph::new(key_hint_line(hints, style)).alignment(style.alignment);
    if let Some(bg) = style.background {
        paragraph = paragraph.style(Style::default().bg(bg));
    }
    paragraph.render(area, buf);
}
