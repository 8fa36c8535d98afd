use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::filter::StatusFilter;
use crate::tui::app::{App, Mode};
use crate::util::line_edit;

/// Filter tabs on the first row, the search box on the second
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let progress = app.store.progress();
    let current = app.store.filter();

    let mut tabs: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    for filter in StatusFilter::ALL {
        let label = format!(" {} {} ", filter.label(), progress.count_for(filter));
        let style = if filter == current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let query = app.store.search_query();
    let searching = app.mode == Mode::Search;
    let prompt_style = Style::default()
        .fg(if searching {
            app.theme.highlight
        } else {
            app.theme.dim
        })
        .bg(bg);
    let search = if query.is_empty() && !searching {
        Line::from(Span::styled(" / search", prompt_style))
    } else {
        let room = (area.width as usize).saturating_sub(4);
        Line::from(vec![
            Span::styled(" / ", prompt_style),
            Span::styled(
                line_edit::truncate_to_width(query, room),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ])
    };

    let paragraph = Paragraph::new(vec![Line::from(tabs), search]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if searching && area.height > 1 {
        let col = line_edit::cursor_col(query, app.text_cursor) as u16;
        let x = (area.x + 3 + col).min(area.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
