use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    let answer = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return,
    };
    app.mode = Mode::Navigate;
    let Some(state) = app.confirm_state.take() else {
        return;
    };

    // The popup already asked; hand the user's answer to the store's gate
    let mut gate = |_: &str| answer;
    match state.action {
        ConfirmAction::DeleteTask(id) => {
            if app.store.delete(id, &mut gate) {
                app.status_message = Some("Task deleted".to_string());
            }
        }
        ConfirmAction::ClearCompleted => {
            let removed = app.store.clear_completed(&mut gate);
            if removed > 0 {
                app.status_message = Some(format!("Removed {removed} completed"));
            }
        }
    }
    app.clamp_cursor();
}
