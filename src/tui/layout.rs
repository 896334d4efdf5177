use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::ops::Range;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Window of rows to show so the selected row stays roughly centered.
pub fn visible_rows(len: usize, selected: usize, view_height: usize) -> Range<usize> {
    if len == 0 || view_height == 0 {
        return 0..0;
    }
    let start = selected
        .saturating_sub(view_height / 2)
        .min(len.saturating_sub(view_height));
    let end = (start + view_height).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_selection() {
        assert_eq!(visible_rows(0, 0, 5), 0..0);
        assert_eq!(visible_rows(3, 2, 10), 0..3);
        assert_eq!(visible_rows(20, 10, 6), 7..13);
        assert_eq!(visible_rows(20, 19, 6), 14..20);
    }
}
