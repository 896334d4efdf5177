use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::section_title;
use crate::tui::centered_rect;

/// Draw the modal help overlay describing navigation, views, and shortcuts.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(60, 70, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        section_title("ghdash - Help"),
        Line::from(""),
        section_title("Navigation:"),
        Line::from("  ←/→, j/k    Select bucket"),
        Line::from("  g/G         Jump to first/last bucket"),
        Line::from("  Tab         Switch Dashboard/Buckets"),
        Line::from(""),
        section_title("Actions:"),
        Line::from("  c           Copy selected bucket summary"),
        Line::from(""),
        section_title("General:"),
        Line::from("  h, F1       Toggle this help"),
        Line::from("  q           Quit application"),
        Line::from(""),
        Line::styled(
            "Press 'h' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        ),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
