use crate::editor::FormField;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// The clock published a new display string
    Tick(String),

    /// Request to quit the application
    Quit,
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    List,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FormField::Name)
    }
}

impl Focus {
    /// Tab order: Name, Ingredients, Instructions, List, then back to Name
    pub fn next(self) -> Self {
        match self {
            Focus::Field(FormField::Name) => Focus::Field(FormField::Ingredients),
            Focus::Field(FormField::Ingredients) => Focus::Field(FormField::Instructions),
            Focus::Field(FormField::Instructions) => Focus::List,
            Focus::List => Focus::Field(FormField::Name),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Field(FormField::Name) => Focus::List,
            Focus::Field(FormField::Ingredients) => Focus::Field(FormField::Name),
            Focus::Field(FormField::Instructions) => Focus::Field(FormField::Ingredients),
            Focus::List => Focus::Field(FormField::Instructions),
        }
    }

    pub fn field(self) -> Option<FormField> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::List => None,
        }
    }
}
