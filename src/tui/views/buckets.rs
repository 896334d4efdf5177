use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::super::{
    draw::{intensity_bar, intensity_style, language_color},
    layout::visible_rows,
    state::{DashboardData, TuiState},
};
use super::{header_cell, legend_line, section_title};
use crate::heat::OTHER;
use crate::util::date_span;

/// Render the bucket table and a side panel of details for the selected bucket.
pub fn draw_buckets_view(f: &mut Frame, area: Rect, data: &DashboardData, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let view_height = chunks[0].height.saturating_sub(3) as usize;
    let window = visible_rows(data.visuals.len(), state.selected, view_height);

    let rows: Vec<Row> = data.visuals[window.clone()]
        .iter()
        .zip(window)
        .map(|(visual, idx)| {
            let bucket = &visual.bucket;
            let is_selected = idx == state.selected;
            let span = date_span(bucket.start_date, bucket.end_date);
            let period_cell = if is_selected {
                Cell::from(format!("{span} ◄")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Cell::from(span).style(Style::default().fg(Color::White))
            };

            let commits_cell = Cell::from(format!(
                "{:>4} {}",
                bucket.total_commits,
                intensity_bar(visual.commit_height_fraction, 5)
            ))
            .style(intensity_style(visual.commit_height_fraction));
            let prs_cell = Cell::from(format!(
                "{:>3} {}",
                bucket.pull_request_count,
                intensity_bar(visual.pr_height_fraction, 5)
            ))
            .style(Style::default().fg(Color::Gray));
            let language_cell = Cell::from(format!(
                "■ {}",
                bucket.dominant_language.as_deref().unwrap_or(OTHER)
            ))
            .style(Style::default().fg(language_color(&visual.color)));

            Row::new(vec![period_cell, commits_cell, prs_cell, language_cell])
        })
        .collect();

    let title = match state.current_status() {
        Some(status) => format!("Buckets | {status}"),
        None => "Buckets | Press 'h' for help".to_string(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(28),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Percentage(100),
        ],
    )
    .header(Row::new([
        header_cell("Period", Color::Yellow),
        header_cell("Commits", Color::Green),
        header_cell("PRs", Color::Cyan),
        header_cell("Language", Color::Magenta),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    f.render_widget(table, chunks[0]);
    draw_bucket_side_panel(f, chunks[1], data, state);
}

/// Render the right-hand panel with the selected bucket's numbers and the color legend.
pub fn draw_bucket_side_panel(f: &mut Frame, area: Rect, data: &DashboardData, state: &TuiState) {
    let block = Block::default()
        .title("Bucket")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let Some(visual) = data.visuals.get(state.selected) else {
        f.render_widget(Paragraph::new("No data to display").block(block), area);
        return;
    };
    let bucket = &visual.bucket;

    let lines = vec![
        section_title("Bucket Details"),
        Line::from(vec![
            Span::styled("From: ", Style::default().fg(Color::White)),
            Span::styled(bucket.start_date.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("To: ", Style::default().fg(Color::White)),
            Span::styled(bucket.end_date.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Commits: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{} ({:.0}%)", bucket.total_commits, visual.commit_height_fraction * 100.0),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Pull requests: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{} ({:.0}%)", bucket.pull_request_count, visual.pr_height_fraction * 100.0),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Language: ", Style::default().fg(Color::White)),
            Span::styled(
                bucket.dominant_language.clone().unwrap_or_else(|| OTHER.to_string()),
                Style::default().fg(language_color(&visual.color)),
            ),
        ]),
        Line::from(""),
        section_title("Legend"),
        legend_line(&data.palette),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        area,
    );
}
