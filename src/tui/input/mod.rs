mod add;
mod common;
mod confirm;
mod edit;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

// Pull every handler into this namespace so submodules can reach each
// other through `use super::*;`
#[allow(unused_imports)]
use add::*;
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use search::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the key that closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}

/// Handle a bracketed paste. Only lands in an active text field, with
/// newlines flattened to spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    let Some(field) = app.active_field() else {
        return;
    };
    let clean = text.replace(['\r', '\n'], " ");
    if clean.is_empty() {
        return;
    }
    let mut buf = app.field_text(field).to_string();
    crate::util::line_edit::insert_str(&mut buf, &mut app.text_cursor, &clean);
    app.set_field_text(field, buf);
    if field == super::app::TextField::Search {
        app.cursor = 0;
    }
}
