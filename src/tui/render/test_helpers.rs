use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::task::{Category, Priority};
use crate::ops::store::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App over personal/medium tasks given as (text, completed), top row first.
pub fn app_with_tasks(tasks: &[(&str, bool)]) -> App {
    let mut store = TaskStore::new();
    for (text, completed) in tasks.iter().rev() {
        if let Some(id) = store.create(text, Category::Personal, Priority::Medium)
            && *completed
        {
            store.toggle(id);
        }
    }
    App::new(store)
}

/// App over the four sample tasks.
pub fn sample_app() -> App {
    let mut store = TaskStore::new();
    store.seed_sample_tasks();
    App::new(store)
}
