pub mod add_panel;
pub mod confirm_popup;
pub mod filter_bar;
pub mod header;
pub mod help_overlay;
pub mod status_row;
pub mod task_list;

mod helpers;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let panel_height = if app.store.is_add_panel_open() {
        add_panel::PANEL_HEIGHT
    } else {
        0
    };

    // Layout: header | filter bar | add panel (optional) | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // title + progress gauge
            Constraint::Length(2),            // filter tabs + search
            Constraint::Length(panel_height), // add panel
            Constraint::Min(1),               // task list
            Constraint::Length(1),            // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    filter_bar::render_filter_bar(frame, app, chunks[1]);
    if panel_height > 0 {
        add_panel::render_add_panel(frame, app, chunks[2]);
    }
    task_list::render_task_list(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    if app.mode == Mode::Confirm {
        confirm_popup::render_confirm_popup(frame, app, area);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Push spans for `text`, highlighting case-insensitive occurrences of
/// `query`. Falls back to a single span when there is nothing to highlight
/// or lowercasing would shift byte offsets.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    query: &str,
) {
    let haystack = text.to_lowercase();
    let needle = query.to_lowercase();
    if needle.is_empty() || haystack.len() != text.len() {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    }

    let mut last_end = 0;
    for (start, m) in haystack.match_indices(&needle) {
        if !text.is_char_boundary(start) || !text.is_char_boundary(start + m.len()) {
            continue;
        }
        if start > last_end {
            spans.push(Span::styled(text[last_end..start].to_string(), base_style));
        }
        spans.push(Span::styled(
            text[start..start + m.len()].to_string(),
            highlight_style,
        ));
        last_end = start + m.len();
    }
    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
