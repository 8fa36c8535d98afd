//! Single-line text editing on a `String` plus a byte-offset cursor.
//!
//! The cursor always sits on a grapheme boundary, so combining marks and
//! emoji sequences move and delete as one unit.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cell width of `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `s` into `max_cells`, ending in `…` when something was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > max_cells - 1 {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Cell column of the cursor, for placing the terminal caret.
pub fn cursor_col(buf: &str, cursor: usize) -> usize {
    display_width(&buf[..cursor.min(buf.len())])
}

fn prev_boundary(buf: &str, cursor: usize) -> usize {
    buf[..cursor]
        .grapheme_indices(true)
        .next_back()
        .map_or(0, |(i, _)| i)
}

fn next_boundary(buf: &str, cursor: usize) -> usize {
    buf[cursor..]
        .graphemes(true)
        .next()
        .map_or(buf.len(), |g| cursor + g.len())
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

pub fn insert_str(buf: &mut String, cursor: &mut usize, s: &str) {
    *cursor = (*cursor).min(buf.len());
    buf.insert_str(*cursor, s);
    *cursor += s.len();
}

pub fn insert_char(buf: &mut String, cursor: &mut usize, c: char) {
    let mut tmp = [0u8; 4];
    insert_str(buf, cursor, c.encode_utf8(&mut tmp));
}

/// Delete the grapheme before the cursor.
pub fn backspace(buf: &mut String, cursor: &mut usize) -> bool {
    if *cursor == 0 {
        return false;
    }
    let start = prev_boundary(buf, *cursor);
    buf.replace_range(start..*cursor, "");
    *cursor = start;
    true
}

/// Delete the grapheme under the cursor.
pub fn delete(buf: &mut String, cursor: &mut usize) -> bool {
    if *cursor >= buf.len() {
        return false;
    }
    let end = next_boundary(buf, *cursor);
    buf.replace_range(*cursor..end, "");
    true
}

pub fn move_left(buf: &str, cursor: &mut usize) {
    *cursor = prev_boundary(buf, *cursor);
}

pub fn move_right(buf: &str, cursor: &mut usize) {
    if *cursor < buf.len() {
        *cursor = next_boundary(buf, *cursor);
    }
}

/// Start of the word left of the cursor (whitespace-delimited).
pub fn word_left(buf: &str, cursor: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = buf[..cursor].grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(cursor, |(i, _)| *i)
}

/// Start of the next word right of the cursor.
pub fn word_right(buf: &str, cursor: usize) -> usize {
    let mut seen_blank = false;
    for (i, g) in buf[cursor..].grapheme_indices(true) {
        if is_blank(g) {
            seen_blank = true;
        } else if seen_blank {
            return cursor + i;
        }
    }
    buf.len()
}

/// Delete from the start of the previous word up to the cursor.
pub fn delete_word_back(buf: &mut String, cursor: &mut usize) -> bool {
    let start = word_left(buf, *cursor);
    if start == *cursor {
        return false;
    }
    buf.replace_range(start..*cursor, "");
    *cursor = start;
    true
}
