use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, TextField};

use super::*;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let id = app.store.editing_id();
            if app.store.commit_edit() {
                app.status_message = Some("Saved".to_string());
            }
            app.mode = Mode::Navigate;
            // The new text may no longer match the search
            if let Some(id) = id {
                app.select_task(id);
            }
            app.clamp_cursor();
        }
        KeyCode::Esc => {
            app.store.cancel_edit();
            app.mode = Mode::Navigate;
        }
        _ => {
            edit_field(app, TextField::Edit, key);
        }
    }
}
