//! Recipe cards with a movable selection

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::theme::{
    ACCENT_PRIMARY, ACCENT_SECONDARY, BORDER_DEFAULT, BORDER_FOCUSED, SELECTED_BG, TEXT_MUTED,
    TEXT_SECONDARY,
};
use crate::data::{Recipe, RecipeId};

/// Selection over the store's recipe order
#[derive(Debug, Clone, Default)]
pub struct RecipeListState {
    list: ListState,
}

impl RecipeListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    pub fn selected_id(&self, recipes: &[Recipe]) -> Option<RecipeId> {
        self.selected()
            .and_then(|i| recipes.get(i))
            .map(|recipe| recipe.id)
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.list.select(None);
            return;
        }
        let next = match self.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.list.select(None);
            return;
        }
        let prev = self.selected().map_or(0, |i| i.saturating_sub(1));
        self.list.select(Some(prev));
    }

    pub fn select_id(&mut self, recipes: &[Recipe], id: RecipeId) {
        if let Some(index) = recipes.iter().position(|r| r.id == id) {
            self.list.select(Some(index));
        }
    }

    /// Keep the selection inside the list after it changes
    pub fn clamp(&mut self, len: usize) {
        match self.selected() {
            _ if len == 0 => self.list.select(None),
            Some(i) if i >= len => self.list.select(Some(len - 1)),
            _ => {}
        }
    }
}

pub struct RecipeList<'a> {
    recipes: &'a [Recipe],
    focused: bool,
    editing: Option<RecipeId>,
}

impl<'a> RecipeList<'a> {
    pub fn new(recipes: &'a [Recipe]) -> Self {
        Self {
            recipes,
            focused: false,
            editing: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark the recipe currently loaded in the form
    pub fn editing(mut self, id: Option<RecipeId>) -> Self {
        self.editing = id;
        self
    }

    fn item(&self, recipe: &'a Recipe) -> ListItem<'a> {
        let mut title = vec![Span::styled(
            recipe.name.as_str(),
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )];
        if self.editing == Some(recipe.id) {
            title.push(Span::styled("  (editing)", Style::default().fg(ACCENT_SECONDARY)));
        }

        let mut lines = vec![
            Line::from(title),
            Line::from(vec![
                Span::styled("Ingredients: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(recipe.ingredients_text(), Style::default().fg(TEXT_SECONDARY)),
            ]),
        ];
        if let Some(stamp) = &recipe.display_id {
            lines.push(
                Line::from(Span::styled(
                    format!("-- Updated {stamp} --"),
                    Style::default()
                        .fg(TEXT_MUTED)
                        .add_modifier(Modifier::ITALIC),
                ))
                .right_aligned(),
            );
        }
        lines.push(Line::default());

        ListItem::new(lines)
    }
}

impl StatefulWidget for RecipeList<'_> {
    type State = RecipeListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border = if self.focused {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(" Recipes ");

        if self.recipes.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Line::from(Span::styled(
                "No recipes yet. Fill in the form to add one.",
                Style::default().fg(TEXT_MUTED),
            ))
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self.recipes.iter().map(|r| self.item(r)).collect();
        let mut highlight = Style::default();
        if self.focused {
            highlight = highlight.bg(SELECTED_BG);
        }
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▌ ");

        StatefulWidget::render(list, area, buf, &mut state.list);
    }
}
