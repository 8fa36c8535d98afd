use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, TextField};

use super::*;

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        // Keep the query, back to the list
        KeyCode::Enter | KeyCode::Down => {
            app.mode = Mode::Navigate;
        }
        // Drop the query
        KeyCode::Esc => {
            app.store.set_search_query("");
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        _ => {
            let before = app.store.search_query().len();
            if edit_field(app, TextField::Search, key) && app.store.search_query().len() != before {
                app.cursor = 0;
            }
        }
    }
}
