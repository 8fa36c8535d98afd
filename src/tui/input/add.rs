use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{AddField, App, Mode, TextField};

use super::*;

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Draft text survives for the next time the panel opens
            app.store.set_add_panel_open(false);
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => submit_draft(app),
        KeyCode::Tab | KeyCode::Down => focus(app, app.add_focus.next()),
        KeyCode::BackTab | KeyCode::Up => focus(app, app.add_focus.prev()),
        _ => match app.add_focus {
            AddField::Text => {
                edit_field(app, TextField::Draft, key);
            }
            AddField::Category => cycle_category(app, key),
            AddField::Priority => cycle_priority(app, key),
        },
    }
}

fn focus(app: &mut App, field: AddField) {
    app.add_focus = field;
    if field == AddField::Text {
        app.caret_to_end(TextField::Draft);
    }
}

fn cycle_category(app: &mut App, key: KeyEvent) {
    let current = app.store.draft().category;
    let next = match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => current.next(),
        KeyCode::Left | KeyCode::Char('h') => current.prev(),
        _ => return,
    };
    app.store.set_draft_category(next);
}

fn cycle_priority(app: &mut App, key: KeyEvent) {
    let current = app.store.draft().priority;
    let next = match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => current.next(),
        KeyCode::Left | KeyCode::Char('h') => current.prev(),
        _ => return,
    };
    app.store.set_draft_priority(next);
}

fn submit_draft(app: &mut App) {
    let Some(id) = app.store.create_from_draft() else {
        return;
    };
    app.mode = Mode::Navigate;
    app.add_focus = AddField::Text;
    app.text_cursor = 0;
    app.select_task(id);
    app.clamp_cursor();
    app.status_message = Some("Task added".to_string());
}
