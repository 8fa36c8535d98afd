use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::filter::StatusFilter;
use crate::ops::store::{clear_completed_prompt, delete_prompt};
use crate::tui::app::{AddField, App, ConfirmAction, ConfirmState, Mode, TextField};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Movement
        (_, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::PageDown) => move_cursor(app, 10),
        (_, KeyCode::PageUp) => move_cursor(app, -10),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.store.visible().len().saturating_sub(1);
        }

        // Task actions
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => toggle_selected(app),
        (_, KeyCode::Char('e') | KeyCode::Enter) => begin_edit_selected(app),
        (_, KeyCode::Char('d') | KeyCode::Delete) => request_delete(app),
        (_, KeyCode::Char('D')) => request_clear_completed(app),
        (_, KeyCode::Char('a')) => open_add_panel(app),

        // Search and filter
        (_, KeyCode::Char('/')) => {
            app.mode = Mode::Search;
            app.caret_to_end(TextField::Search);
        }
        (_, KeyCode::Esc) => {
            if !app.store.search_query().is_empty() {
                app.store.set_search_query("");
                app.clamp_cursor();
            }
        }
        (KeyModifiers::NONE, KeyCode::Tab) => set_filter(app, app.store.filter().next()),
        (_, KeyCode::BackTab) => set_filter(app, app.store.filter().prev()),
        (_, KeyCode::Char('1')) => set_filter(app, StatusFilter::All),
        (_, KeyCode::Char('2')) => set_filter(app, StatusFilter::Active),
        (_, KeyCode::Char('3')) => set_filter(app, StatusFilter::Completed),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.store.visible().len();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(count - 1);
}

pub(super) fn set_filter(app: &mut App, filter: StatusFilter) {
    app.store.set_filter(filter);
    app.cursor = 0;
}

fn toggle_selected(app: &mut App) {
    if let Some(id) = app.selected_task_id() {
        app.store.toggle(id);
        // The task may drop out of an active/completed view
        app.clamp_cursor();
    }
}

fn begin_edit_selected(app: &mut App) {
    if let Some(id) = app.selected_task_id()
        && app.store.begin_edit(id)
    {
        app.mode = Mode::Edit;
        app.caret_to_end(TextField::Edit);
    }
}

fn request_delete(app: &mut App) {
    let Some(task) = app.selected_task() else {
        return;
    };
    let state = ConfirmState {
        action: ConfirmAction::DeleteTask(task.id),
        prompt: delete_prompt(task),
    };
    app.confirm_state = Some(state);
    app.mode = Mode::Confirm;
}

fn request_clear_completed(app: &mut App) {
    let count = app.store.progress().completed;
    if count == 0 {
        app.status_message = Some("No completed tasks".to_string());
        return;
    }
    app.confirm_state = Some(ConfirmState {
        action: ConfirmAction::ClearCompleted,
        prompt: clear_completed_prompt(count),
    });
    app.mode = Mode::Confirm;
}

fn open_add_panel(app: &mut App) {
    if !app.store.is_add_panel_open() {
        app.store.toggle_add_panel();
    }
    app.mode = Mode::Add;
    app.add_focus = AddField::Text;
    app.caret_to_end(TextField::Draft);
}
