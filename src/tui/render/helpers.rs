use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::model::task::Task;
use crate::util::line_edit;

/// Checkbox shown in front of each task
pub(super) fn checkbox(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| line_edit::display_width(&s.content))
        .sum()
}

/// Lay out `left` and `right` on one line of `width` cells, filling the gap
/// with `fill`. The right part is dropped when both do not fit.
pub(super) fn split_line<'a>(
    mut left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    fill: Style,
) -> Line<'a> {
    let used = spans_width(&left) + spans_width(&right);
    if used < width {
        left.push(Span::styled(" ".repeat(width - used), fill));
        left.extend(right);
    }
    Line::from(left)
}

/// Fixed-size rectangle centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
