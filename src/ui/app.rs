use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};

use crate::book::RecipeBook;
use crate::clock::ClockTicker;
use crate::data::LoadOutcome;
use crate::editor::{FormError, FormField, Stamp, SubmitOutcome};
use crate::ui::components::{
    render_key_hints, GlobalFooter, Header, KeyHintBarStyle, RecipeForm, RecipeFormState,
    RecipeList, RecipeListState, StatusLine, StatusMessage, FORM_MIN_HEIGHT,
};
use crate::ui::events::{AppEvent, Focus};
use crate::ui::terminal_guard::TerminalGuard;

/// Terminals narrower than this stack the form above the list
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Main application state
pub struct App {
    book: RecipeBook,
    ticker: ClockTicker,
    /// Clock text currently on screen
    clock_text: String,
    form: RecipeFormState,
    list: RecipeListState,
    focus: Focus,
    status: Option<StatusMessage>,
    /// Set by the store subscription
    store_changed: Arc<AtomicBool>,
    needs_redraw: bool,
    should_quit: bool,
}

impl App {
    pub fn new(mut book: RecipeBook, ticker: ClockTicker) -> Self {
        let store_changed = Arc::new(AtomicBool::new(false));
        let flag = store_changed.clone();
        book.subscribe(move |_, _| flag.store(true, Ordering::Release));

        let status = match book.load_outcome() {
            LoadOutcome::Empty => None,
            LoadOutcome::Loaded { count, legacy } => {
                let noun = if *count == 1 { "recipe" } else { "recipes" };
                let suffix = if *legacy { " (old format)" } else { "" };
                Some(StatusMessage::info(format!("Loaded {count} {noun}{suffix}")))
            }
            LoadOutcome::Recovered { error, backup_key } => Some(StatusMessage::warning(
                match backup_key {
                    Some(key) => format!("Stored recipes unreadable ({error}); copy kept in `{key}`"),
                    None => format!("Stored recipes unreadable ({error})"),
                },
            )),
            LoadOutcome::Unavailable { error } => Some(StatusMessage::error(format!(
                "Stored recipes unreadable ({error}); changes will not be saved"
            ))),
        };

        Self {
            clock_text: ticker.current(),
            book,
            ticker,
            form: RecipeFormState::new(),
            list: RecipeListState::new(),
            focus: Focus::default(),
            status,
            store_changed,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    pub fn form(&self) -> &RecipeFormState {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut ticks = self.ticker.subscribe();
        let mut ticker_alive = true;

        while !self.should_quit {
            if self.take_redraw() {
                terminal.draw(|f| self.render(f))?;
            }

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => self.handle_app_event(AppEvent::Input(event)),
                    Some(Err(e)) => return Err(e.into()),
                    None => self.handle_app_event(AppEvent::Quit),
                },
                changed = ticks.changed(), if ticker_alive => {
                    if changed.is_ok() {
                        let text = ticks.borrow_and_update().clone();
                        self.handle_app_event(AppEvent::Tick(text));
                    } else {
                        tracing::warn!("Clock ticker stopped; clock display is frozen");
                        ticker_alive = false;
                    }
                }
            }
        }

        Ok(())
    }

    fn take_redraw(&mut self) -> bool {
        if self.store_changed.swap(false, Ordering::AcqRel) {
            self.list.clamp(self.book.recipes().len());
            self.needs_redraw = true;
        }
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key(key),
            AppEvent::Input(Event::Paste(text)) => {
                if let Some(field) = self.focus.field() {
                    self.form.input_mut(field).insert_str(&text);
                }
            }
            AppEvent::Input(_) => {}
            AppEvent::Tick(text) => self.clock_text = text,
            AppEvent::Quit => self.should_quit = true,
        }
        self.needs_redraw = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                self.on_focus_list();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                self.on_focus_list();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Field(field) => self.handle_form_key(field, key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn on_focus_list(&mut self) {
        if self.focus == Focus::List && self.list.selected().is_none() {
            self.list.select_next(self.book.recipes().len());
        }
    }

    fn handle_form_key(&mut self, field: FormField, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let newline_mods = KeyModifiers::ALT | KeyModifiers::SHIFT;
        let input = self.form.input_mut(field);

        match key.code {
            KeyCode::Enter if key.modifiers.intersects(newline_mods) => input.insert_newline(),
            KeyCode::Char('j') if ctrl => input.insert_newline(),
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.cancel(),
            KeyCode::Backspace => input.delete_char(),
            KeyCode::Delete => input.delete_forward(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Char('a') if ctrl => input.move_start(),
            KeyCode::Char('e') if ctrl => input.move_end(),
            KeyCode::Char('u') if ctrl => input.delete_to_start(),
            KeyCode::Char('k') if ctrl => input.delete_to_end(),
            KeyCode::Char('w') if ctrl => input.delete_word(),
            KeyCode::Char(c) if !ctrl => input.insert_char(c),
            _ => {}
        }
        self.on_focus_list();
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.book.recipes().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(len),
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Esc | KeyCode::Char('i') => self.focus = Focus::Field(FormField::Name),
            _ => {}
        }
    }

    /// Add a recipe, or apply the edit in progress
    fn submit(&mut self) {
        let draft = self.form.draft();
        let name = draft.name.clone();
        let stamp = Stamp::new(self.ticker.clock().now_millis(), self.clock_text.clone());

        match self.book.submit(draft, stamp) {
            Ok(outcome) => {
                self.form.clear();
                self.focus = Focus::Field(FormField::Name);
                let verb = match outcome {
                    SubmitOutcome::Added(_) => "Added",
                    SubmitOutcome::Replaced { .. } | SubmitOutcome::Updated(_) => "Updated",
                };
                self.list.select_id(self.book.recipes(), outcome.id());
                self.status = Some(StatusMessage::success(format!("{verb} \"{name}\"")));
            }
            Err(e @ FormError::MissingField(missing)) => {
                self.focus = Focus::Field(missing);
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn cancel(&mut self) {
        if self.book.editing().is_some() {
            self.book.cancel_edit();
            self.form.clear();
            self.focus = Focus::Field(FormField::Name);
            self.status = Some(StatusMessage::info("Edit cancelled"));
        } else {
            self.status = None;
        }
    }

    fn edit_selected(&mut self) {
        let Some(id) = self.list.selected_id(self.book.recipes()) else {
            return;
        };
        if let Some(draft) = self.book.begin_edit(id) {
            self.status = Some(StatusMessage::info(format!("Editing \"{}\"", draft.name)));
            self.form.load_draft(&draft);
            self.focus = Focus::Field(FormField::Name);
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.list.selected_id(self.book.recipes()) else {
            return;
        };
        let name = self
            .book
            .store()
            .get(id)
            .map(|r| r.name.clone())
            .unwrap_or_default();
        if self.book.remove(id) > 0 {
            self.list.clamp(self.book.recipes().len());
            self.status = Some(StatusMessage::success(format!("Deleted \"{name}\"")));
        }
    }

    /// Draw the whole screen
    pub fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Header::new(&self.clock_text, self.book.recipes().len()),
            header_area,
        );

        let (form_column, list_area) = split_body(body_area);
        let [form_area, status_area, hints_area] = Layout::vertical([
            Constraint::Min(FORM_MIN_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(form_column);

        let editing_id = self.book.editing().map(|r| r.id);
        let form = RecipeForm::new(&self.form)
            .focused(self.focus.field())
            .editing(editing_id.is_some());
        let cursor = form.cursor_position(form_area);
        frame.render_widget(form, form_area);
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }

        StatusLine::new(self.status.as_ref()).render(status_area, frame.buffer_mut());

        let action = if editing_id.is_some() { "update" } else { "add" };
        render_key_hints(
            hints_area,
            frame.buffer_mut(),
            &[("enter", action), ("tab", "next")],
            KeyHintBarStyle::inline(),
        );

        let list = RecipeList::new(self.book.recipes())
            .focused(self.focus == Focus::List)
            .editing(editing_id);
        frame.render_stateful_widget(list, list_area, &mut self.list);

        GlobalFooter::from_state(self.focus, editing_id.is_some())
            .render(footer_area, frame.buffer_mut());
    }
}

fn split_body(area: Rect) -> (Rect, Rect) {
    if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let [form, list] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(area);
        (form, list)
    } else {
        let [form, list] = Layout::vertical([
            Constraint::Length(FORM_MIN_HEIGHT + 2),
            Constraint::Min(0),
        ])
        .areas(area);
        (form, list)
    }
}
