use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Cell;

use super::draw::language_color;
use crate::heat::Palette;

mod buckets;
mod dashboard;
mod help;

pub use buckets::{draw_bucket_side_panel, draw_buckets_view};
pub use dashboard::draw_dashboard;
pub use help::draw_help_overlay;

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub(crate) fn section_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

/// One line of colored swatches naming every palette entry.
pub(crate) fn legend_line(palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (name, color) in palette.legend() {
        spans.push(Span::styled("■ ", Style::default().fg(language_color(color))));
        spans.push(Span::styled(format!("{name}  "), Style::default().fg(Color::White)));
    }
    Line::from(spans)
}
