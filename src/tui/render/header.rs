use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Gauge, Paragraph};

use crate::tui::app::App;

use super::helpers::split_line;

/// Title row plus the completion gauge
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let progress = app.store.progress();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = vec![Span::styled(
        " My Tasks",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let counts = vec![Span::styled(
        format!("{}/{} done ", progress.completed, progress.total),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let line = split_line(title, counts, area.width as usize, Style::default().bg(bg));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), rows[0]);

    let gauge_area = Rect {
        x: rows[1].x + 1,
        width: rows[1].width.saturating_sub(2),
        ..rows[1]
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(app.theme.gauge).bg(app.theme.selection_bg))
        .ratio(progress.ratio())
        .label(Span::styled(
            format!("{}%", progress.percent()),
            Style::default().fg(app.theme.text_bright),
        ));
    frame.render_widget(gauge, gauge_area);
}
