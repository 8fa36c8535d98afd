use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::line_edit;

use super::helpers::centered_rect_fixed;

/// Render the delete / clear-completed confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = &app.confirm_state else {
        return;
    };

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let inner_max = area.width.saturating_sub(6) as usize;
    let prompt = line_edit::truncate_to_width(&state.prompt, inner_max);
    let popup_w = (line_edit::display_width(&prompt) as u16 + 6).max(30).min(area.width);

    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  ", text_style), Span::styled(prompt, text_style)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  y", key_style),
            Span::styled(" yes   ", dim_style),
            Span::styled("n", key_style),
            Span::styled(" no", dim_style),
        ]),
    ];

    let popup_area = centered_rect_fixed(popup_w, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .title(Span::styled(" Confirm ", header_style))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::store::delete_prompt;
    use crate::tui::app::{ConfirmAction, ConfirmState, Mode};
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_prompt_and_choices() {
        let mut app = sample_app();
        let task = app.store.tasks()[0].clone();
        app.confirm_state = Some(ConfirmState {
            action: ConfirmAction::DeleteTask(task.id),
            prompt: delete_prompt(&task),
        });
        app.mode = Mode::Confirm;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(output.contains("Delete \"Complete project presentation\"?"));
        assert!(output.contains("y yes"));
        assert!(output.contains("n no"));
    }

    #[test]
    fn nothing_without_pending_confirmation() {
        let app = sample_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(!output.contains("Confirm"));
    }
}
