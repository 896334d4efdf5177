use ratatui::style::{Color, Modifier, Style};

use crate::util::parse_hex_color;

const LEVELS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Fixed-width intensity bar for a height fraction in `[0, 1]`.
pub fn intensity_bar(fraction: f64, width: usize) -> String {
    let ratio = fraction.clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let intensity_idx = ((ratio * (LEVELS.len() - 1) as f64).round() as usize).min(LEVELS.len() - 1);

    LEVELS[intensity_idx].repeat(filled) + &"░".repeat(width - filled)
}

/// Terminal color for a palette entry; unparseable colors fall back to gray.
pub fn language_color(color: &str) -> Color {
    parse_hex_color(color).map_or(Color::Gray, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Chooses a style based on a bucket's relative commit activity.
pub fn intensity_style(fraction: f64) -> Style {
    if fraction > 0.8 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if fraction > 0.6 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if fraction > 0.4 {
        Style::default().fg(Color::Green)
    } else if fraction > 0.2 {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    }
}
