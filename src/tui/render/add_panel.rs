use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::task::{Category, Priority};
use crate::tui::app::{AddField, App, Mode};
use crate::util::line_edit;

/// Three controls plus the border
pub const PANEL_HEIGHT: u16 = 5;

const LABEL_WIDTH: usize = 11;
const PLACEHOLDER: &str = "What needs to be done?";

/// Render the "new task" form
pub fn render_add_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Add;
    let draft = app.store.draft();

    let label = |field: AddField, text: &'static str| {
        let active = focused && app.add_focus == field;
        let (marker, fg) = if active {
            ("\u{203A} ", app.theme.highlight)
        } else {
            ("  ", app.theme.dim)
        };
        Span::styled(
            format!("{marker}{text:<width$}", width = LABEL_WIDTH - 2),
            Style::default().fg(fg).bg(bg),
        )
    };

    let inner_width = area.width.saturating_sub(2) as usize;

    // Text row
    let text_span = if draft.text.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(app.theme.dim).bg(bg))
    } else {
        Span::styled(
            line_edit::truncate_to_width(&draft.text, inner_width.saturating_sub(LABEL_WIDTH + 1)),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )
    };
    let text_line = Line::from(vec![label(AddField::Text, "Text"), text_span]);

    // Category row
    let mut category_spans = vec![label(AddField::Category, "Category")];
    for category in Category::ALL {
        let color = app.theme.category_color(category);
        let style = if category == draft.category {
            Style::default()
                .fg(bg)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).bg(bg)
        };
        category_spans.push(Span::styled(
            format!(" {} {} ", category.icon(), category.label()),
            style,
        ));
        category_spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    // Priority row
    let mut priority_spans = vec![label(AddField::Priority, "Priority")];
    for priority in Priority::ALL {
        let color = app.theme.priority_color(priority);
        let style = if priority == draft.priority {
            Style::default()
                .fg(bg)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).bg(bg)
        };
        priority_spans.push(Span::styled(format!(" {} ", priority.label()), style));
        priority_spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let border = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " New task ",
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(vec![
        text_line,
        Line::from(category_spans),
        Line::from(priority_spans),
    ])
    .block(block)
    .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if focused && app.add_focus == AddField::Text && area.height > 2 {
        let col = line_edit::cursor_col(&draft.text, app.text_cursor);
        let x = (area.x as usize + 1 + LABEL_WIDTH + col) as u16;
        let x = x.min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
