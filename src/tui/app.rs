use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::filter::StatusFilter;
use crate::ops::store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search box
    Search,
    /// Inline editing of the selected task's text
    Edit,
    /// Add panel has keyboard focus
    Add,
    /// Waiting for a y/n answer
    Confirm,
}

/// Which control of the add panel has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Text,
    Category,
    Priority,
}

impl AddField {
    pub fn next(self) -> Self {
        match self {
            AddField::Text => AddField::Category,
            AddField::Category => AddField::Priority,
            AddField::Priority => AddField::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AddField::Text => AddField::Priority,
            AddField::Category => AddField::Text,
            AddField::Priority => AddField::Category,
        }
    }
}

/// A text input backed by a store field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Search,
    Draft,
    Edit,
}

/// What the confirmation popup will do on `y`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask(TaskId),
    ClearCompleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub prompt: String,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Index into the visible task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte offset of the caret in whichever text field is active
    pub text_cursor: usize,
    pub add_focus: AddField,
    pub confirm_state: Option<ConfirmState>,
    /// One-shot message shown in the status row until the next key
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            show_key_hints: true,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            text_cursor: 0,
            add_focus: AddField::Text,
            confirm_state: None,
            status_message: None,
        }
    }

    /// Build the app from config: theme, draft defaults and sample tasks.
    pub fn from_config(config: &Config, filter: Option<StatusFilter>, empty: bool) -> Self {
        let mut store = TaskStore::with_draft_defaults(
            config.tasks.default_category,
            config.tasks.default_priority,
        );
        if config.tasks.sample_tasks && !empty {
            store.seed_sample_tasks();
        }
        if let Some(filter) = filter {
            store.set_filter(filter);
        }
        let mut app = App::new(store);
        app.theme = Theme::from_config(&config.ui);
        app.show_key_hints = config.ui.show_key_hints;
        app
    }

    /// Task under the cursor in the visible list
    pub fn selected_task(&self) -> Option<&Task> {
        self.store.visible().get(self.cursor).copied()
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Keep the cursor inside the visible list after it shrinks.
    pub fn clamp_cursor(&mut self) {
        let count = self.store.visible().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Move the cursor onto `id` if it is visible.
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(pos) = self.store.visible().iter().position(|t| t.id == id) {
            self.cursor = pos;
        }
    }

    pub fn field_text(&self, field: TextField) -> &str {
        match field {
            TextField::Search => self.store.search_query(),
            TextField::Draft => &self.store.draft().text,
            TextField::Edit => self.store.edit_buffer(),
        }
    }

    pub fn set_field_text(&mut self, field: TextField, text: String) {
        match field {
            TextField::Search => self.store.set_search_query(text),
            TextField::Draft => self.store.set_draft_text(text),
            TextField::Edit => self.store.set_edit_buffer(text),
        }
    }

    /// The text field that currently owns the caret, if any
    pub fn active_field(&self) -> Option<TextField> {
        match self.mode {
            Mode::Search => Some(TextField::Search),
            Mode::Edit => Some(TextField::Edit),
            Mode::Add if self.add_focus == AddField::Text => Some(TextField::Draft),
            _ => None,
        }
    }

    /// Put the caret at the end of `field`.
    pub fn caret_to_end(&mut self, field: TextField) {
        self.text_cursor = self.field_text(field).len();
    }
}

/// Run the TUI application
pub fn run(app: App) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal before the default panic output
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(tasks = app.store.len(), "tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    let progress = app.store.progress();
    tracing::info!(
        total = progress.total,
        completed = progress.completed,
        "tui stopped"
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Category, Priority};

    #[test]
    fn from_config_seeds_samples_unless_empty() {
        let config = Config::default();
        let app = App::from_config(&config, None, false);
        assert_eq!(app.store.len(), 4);

        let app = App::from_config(&config, None, true);
        assert!(app.store.is_empty());
    }

    #[test]
    fn from_config_applies_defaults_and_filter() {
        let mut config = Config::default();
        config.tasks.sample_tasks = false;
        config.tasks.default_category = Category::Shopping;
        config.tasks.default_priority = Priority::High;
        config.ui.show_key_hints = false;

        let app = App::from_config(&config, Some(StatusFilter::Completed), false);
        assert!(app.store.is_empty());
        assert_eq!(app.store.draft().category, Category::Shopping);
        assert_eq!(app.store.draft().priority, Priority::High);
        assert_eq!(app.store.filter(), StatusFilter::Completed);
        assert!(!app.show_key_hints);
    }

    #[test]
    fn clamp_cursor_after_list_shrinks() {
        let mut app = App::new(TaskStore::new());
        app.store.seed_sample_tasks();
        app.cursor = 3;
        app.store.set_filter(StatusFilter::Completed);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);

        app.store.set_search_query("nothing matches this");
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected_task_id(), None);
    }

    #[test]
    fn active_field_follows_mode() {
        let mut app = App::new(TaskStore::new());
        assert_eq!(app.active_field(), None);
        app.mode = Mode::Search;
        assert_eq!(app.active_field(), Some(TextField::Search));
        app.mode = Mode::Add;
        app.add_focus = AddField::Priority;
        assert_eq!(app.active_field(), None);
        app.add_focus = AddField::Text;
        assert_eq!(app.active_field(), Some(TextField::Draft));
    }
}
