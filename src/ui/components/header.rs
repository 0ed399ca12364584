//! Title bar with the live clock

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, HEADER_BG, TEXT_MUTED, TEXT_SECONDARY};

pub const APP_TITLE: &str = "Recipe Book";

pub struct Header<'a> {
    clock: &'a str,
    recipe_count: usize,
}

impl<'a> Header<'a> {
    pub fn new(clock: &'a str, recipe_count: usize) -> Self {
        Self {
            clock,
            recipe_count,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(HEADER_BG));

        let clock_width = self.clock.chars().count() as u16 + 2;
        let [title_area, clock_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(clock_width)]).areas(area);

        let noun = if self.recipe_count == 1 { "recipe" } else { "recipes" };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {APP_TITLE}"),
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} {noun}", self.recipe_count),
                Style::default().fg(TEXT_MUTED),
            ),
        ]))
        .render(title_area, buf);

        Paragraph::new(Span::styled(
            self.clock,
            Style::default().fg(TEXT_SECONDARY),
        ))
        .render(clock_area, buf);
    }
}
