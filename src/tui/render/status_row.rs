use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::split_line;

/// Key hints for the current mode
fn mode_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  e edit  space toggle  d delete  / search  ? help  q quit",
        Mode::Search => "Enter keep  Esc clear",
        Mode::Edit => "Enter save  Esc cancel",
        Mode::Add => "Tab field  \u{2190}\u{2192} change  Enter add  Esc close",
        Mode::Confirm => "y yes  n no",
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "",
        Mode::Search => " SEARCH",
        Mode::Edit => " EDIT",
        Mode::Add => " ADD",
        Mode::Confirm => " CONFIRM",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let fill = Style::default().bg(bg);

    let left = match &app.status_message {
        Some(msg) => vec![Span::styled(
            format!(" {msg}"),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )],
        None => vec![Span::styled(
            mode_label(app.mode),
            Style::default().fg(app.theme.highlight).bg(bg),
        )],
    };

    let right = if app.show_key_hints {
        vec![Span::styled(
            format!("{} ", mode_hints(app.mode)),
            Style::default().fg(app.theme.dim).bg(bg),
        )]
    } else {
        Vec::new()
    };

    let line: Line = split_line(left, right, width, fill);
    frame.render_widget(Paragraph::new(line).style(fill), area);
}
