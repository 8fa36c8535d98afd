use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Tasks", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(&mut lines, " Space/x", "Toggle done", key_style, desc_style);
    add_binding(&mut lines, " e/Enter", "Edit text", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete task", key_style, desc_style);
    add_binding(&mut lines, " D", "Clear completed", key_style, desc_style);
    add_binding(&mut lines, " a", "Add panel", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Filter", header_style)));
    add_binding(&mut lines, " /", "Search", key_style, desc_style);
    add_binding(&mut lines, " Tab/S-Tab", "Next/prev filter", key_style, desc_style);
    add_binding(&mut lines, " 1/2/3", "All/Active/Completed", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Clear search", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Search", header_style)));
    add_binding(&mut lines, " Enter", "Keep query", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Clear query", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Edit", header_style)));
    add_binding(&mut lines, " Enter", "Save edit", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Cancel edit", key_style, desc_style);
    add_binding(&mut lines, " C-w/A-Bksp", "Delete word back", key_style, desc_style);
    add_binding(&mut lines, " C-u", "Delete to start", key_style, desc_style);
    add_binding(&mut lines, " C-a/C-e", "Start/end of line", key_style, desc_style);
    add_binding(&mut lines, " A-\u{2190}\u{2192}", "Move by word", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Add panel", header_style)));
    add_binding(&mut lines, " Tab", "Next field", key_style, desc_style);
    add_binding(&mut lines, " \u{2190}\u{2192}", "Change category/priority", key_style, desc_style);
    add_binding(&mut lines, " Enter", "Create task", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Close (keeps draft)", key_style, desc_style);
    lines.push(Line::from(""));

    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(" Key Bindings ", header_style))
        .title_bottom(Span::styled(
            " any key to close ",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let padded_key = format!("{key:<14}");
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
