use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, TextField};
use crate::util::line_edit;

/// Apply a line-editing key to `buf`. Returns false for keys that are not
/// text editing, so the caller can handle them.
pub(super) fn edit_line(buf: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('a') if ctrl => *cursor = 0,
        KeyCode::Char('e') if ctrl => *cursor = buf.len(),
        KeyCode::Char('w') if ctrl => {
            line_edit::delete_word_back(buf, cursor);
        }
        KeyCode::Char('u') if ctrl => {
            buf.replace_range(..*cursor, "");
            *cursor = 0;
        }
        KeyCode::Char(_) if ctrl || alt => return false,
        KeyCode::Char(c) => line_edit::insert_char(buf, cursor, c),
        KeyCode::Backspace if alt => {
            line_edit::delete_word_back(buf, cursor);
        }
        KeyCode::Backspace => {
            line_edit::backspace(buf, cursor);
        }
        KeyCode::Delete => {
            line_edit::delete(buf, cursor);
        }
        KeyCode::Left if ctrl || alt => *cursor = line_edit::word_left(buf, *cursor),
        KeyCode::Right if ctrl || alt => *cursor = line_edit::word_right(buf, *cursor),
        KeyCode::Left => line_edit::move_left(buf, cursor),
        KeyCode::Right => line_edit::move_right(buf, cursor),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buf.len(),
        _ => return false,
    }
    true
}

/// Route a key into one of the store-backed text fields.
/// Returns whether the key was consumed.
pub(super) fn edit_field(app: &mut App, field: TextField, key: KeyEvent) -> bool {
    let mut buf = app.field_text(field).to_string();
    app.text_cursor = app.text_cursor.min(buf.len());
    if !edit_line(&mut buf, &mut app.text_cursor, key) {
        return false;
    }
    if buf != app.field_text(field) {
        app.set_field_text(field, buf);
    }
    true
}
