use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::{App, Mode};
use crate::util::line_edit;

use super::helpers::{checkbox, spans_width, split_line};
use super::push_highlighted_spans;

/// Width reserved on the right for "Shopping !!!"
const META_WIDTH: usize = 13;

/// Render the filtered task list
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;

    let count = app.store.visible().len();
    if count == 0 {
        let message = empty_message(app);
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(app.theme.dim).bg(bg),
            )),
        ])
        .style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    // Keep the cursor row on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    app.scroll_offset = app.scroll_offset.min(count.saturating_sub(1));

    let app = &*app;
    let editing = if app.mode == Mode::Edit {
        app.store.editing_id()
    } else {
        None
    };
    let width = area.width as usize;
    let visible = app.store.visible();

    let mut lines = Vec::with_capacity(height);
    let mut caret = None;
    for (row, task) in visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = row == app.cursor;
        let is_editing = editing == Some(task.id);
        let (line, text_col) = task_line(app, task, selected, is_editing, width);
        if is_editing {
            let y = area.y + (row - app.scroll_offset) as u16;
            caret = Some((text_col, y));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if let Some((text_col, y)) = caret {
        let col = line_edit::cursor_col(app.store.edit_buffer(), app.text_cursor);
        let x = (area.x as usize + text_col + col).min(area.right().saturating_sub(1) as usize);
        frame.set_cursor_position(Position::new(x as u16, y));
    }
}

fn empty_message(app: &App) -> &'static str {
    if app.store.is_empty() {
        "No tasks yet. Press a to add one."
    } else if !app.store.search_query().is_empty() {
        "No matching tasks."
    } else {
        "Nothing here."
    }
}

/// Build one row. Also returns the column where the task text starts.
fn task_line<'a>(
    app: &App,
    task: &'a Task,
    selected: bool,
    editing: bool,
    width: usize,
) -> (Line<'a>, usize) {
    let theme = &app.theme;
    let row_bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let fill = Style::default().bg(row_bg);

    let marker = if selected { " \u{25B8} " } else { "   " };
    let check_color = if task.completed {
        theme.green
    } else {
        theme.text
    };
    let mut left = vec![
        Span::styled(marker, Style::default().fg(theme.highlight).bg(row_bg)),
        Span::styled(checkbox(task), Style::default().fg(check_color).bg(row_bg)),
        Span::styled(" ", fill),
        Span::styled(
            format!("{} ", task.category.icon()),
            Style::default()
                .fg(theme.category_color(task.category))
                .bg(row_bg),
        ),
    ];
    let text_col = spans_width(&left);

    let right = vec![
        Span::styled(
            format!("{:>8}", task.category.label()),
            Style::default().fg(theme.category_color(task.category)).bg(row_bg),
        ),
        Span::styled(
            format!(" {:<3} ", task.priority.marker()),
            Style::default()
                .fg(theme.priority_color(task.priority))
                .bg(row_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let room = width.saturating_sub(text_col + META_WIDTH + 1);
    if editing {
        left.push(Span::styled(
            line_edit::truncate_to_width(app.store.edit_buffer(), room),
            Style::default()
                .fg(theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::UNDERLINED),
        ));
    } else {
        let text = line_edit::truncate_to_width(&task.text, room);
        let mut base = Style::default().fg(theme.text).bg(row_bg);
        if task.completed {
            base = base.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
        } else if selected {
            base = base.fg(theme.text_bright);
        }
        let highlight = Style::default().fg(theme.background).bg(theme.highlight);
        push_highlighted_spans(
            &mut left,
            &text,
            base,
            highlight,
            app.store.search_query(),
        );
    }

    (split_line(left, right, width, fill), text_col)
}
