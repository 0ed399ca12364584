//! Recipe form: three bordered inputs and the submit label

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::text_input::TextInputState;
use super::theme::{
    ACCENT_PRIMARY, ACCENT_SECONDARY, BORDER_DEFAULT, BORDER_FOCUSED, TEXT_FAINT, TEXT_PRIMARY,
};
use crate::editor::{FormField, RecipeDraft};

/// Height of the single-line inputs including borders
const LINE_INPUT_HEIGHT: u16 = 3;
/// Minimum height of the instructions box including borders
const INSTRUCTIONS_MIN_HEIGHT: u16 = 5;

/// Form height that shows every input at its minimum size
pub const FORM_MIN_HEIGHT: u16 = LINE_INPUT_HEIGHT * 2 + INSTRUCTIONS_MIN_HEIGHT + 1;

#[derive(Debug, Clone)]
pub struct RecipeFormState {
    name: TextInputState,
    ingredients: TextInputState,
    instructions: TextInputState,
}

impl Default for RecipeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeFormState {
    pub fn new() -> Self {
        Self {
            name: TextInputState::new(),
            ingredients: TextInputState::new(),
            instructions: TextInputState::multiline(),
        }
    }

    pub fn input(&self, field: FormField) -> &TextInputState {
        match field {
            FormField::Name => &self.name,
            FormField::Ingredients => &self.ingredients,
            FormField::Instructions => &self.instructions,
        }
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut TextInputState {
        match field {
            FormField::Name => &mut self.name,
            FormField::Ingredients => &mut self.ingredients,
            FormField::Instructions => &mut self.instructions,
        }
    }

    /// Snapshot of the current text
    pub fn draft(&self) -> RecipeDraft {
        RecipeDraft::new(
            self.name.value(),
            self.ingredients.value(),
            self.instructions.value(),
        )
    }

    pub fn load_draft(&mut self, draft: &RecipeDraft) {
        for field in FormField::ALL {
            self.input_mut(field).set(draft.field(field));
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.ingredients.clear();
        self.instructions.clear();
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|f| self.input(*f).is_empty())
    }
}

/// Widget for [`RecipeFormState`]
pub struct RecipeForm<'a> {
    state: &'a RecipeFormState,
    focused: Option<FormField>,
    editing: bool,
}

impl<'a> RecipeForm<'a> {
    pub fn new(state: &'a RecipeFormState) -> Self {
        Self {
            state,
            focused: None,
            editing: false,
        }
    }

    pub fn focused(mut self, field: Option<FormField>) -> Self {
        self.focused = field;
        self
    }

    /// Label the submit action "Update" instead of "Add"
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    fn layout(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(LINE_INPUT_HEIGHT),
            Constraint::Length(LINE_INPUT_HEIGHT),
            Constraint::Min(INSTRUCTIONS_MIN_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area)
    }

    fn field_area(area: Rect, field: FormField) -> Rect {
        let [name, ingredients, instructions, _] = Self::layout(area);
        match field {
            FormField::Name => name,
            FormField::Ingredients => ingredients,
            FormField::Instructions => instructions,
        }
    }

    fn placeholder(field: FormField) -> &'static str {
        match field {
            FormField::Name => "e.g. Pancakes",
            FormField::Ingredients => "flour, eggs, milk",
            FormField::Instructions => "Mix, then fry until golden.",
        }
    }

    /// Terminal cursor position for the focused input, if any
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let field = self.focused?;
        let inner = Self::field_area(area, field).inner(ratatui::layout::Margin::new(1, 1));
        let (row, col) = self.state.input(field).cursor_row_col();
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let x = inner.x + col.min(inner.width - 1);
        let y = inner.y + row.min(inner.height - 1);
        Some(Position::new(x, y))
    }
}

impl Widget for RecipeForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for field in FormField::ALL {
            let focused = self.focused == Some(field);
            let border = if focused { BORDER_FOCUSED } else { BORDER_DEFAULT };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", field.label()));

            let field_area = Self::field_area(area, field);
            let inner = block.inner(field_area);
            block.render(field_area, buf);

            self.state.input(field).render_with_placeholder(
                inner,
                buf,
                Style::default().fg(TEXT_PRIMARY),
                Self::placeholder(field),
                Style::default().fg(TEXT_FAINT),
            );
        }

        let [.., action_area] = Self::layout(area);
        let label = if self.editing {
            "[ Update Recipe ]"
        } else {
            "[ Add Recipe ]"
        };
        let color = if self.editing {
            ACCENT_SECONDARY
        } else {
            ACCENT_PRIMARY
        };
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .render(action_area, buf);
    }
}
