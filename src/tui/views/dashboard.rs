use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::super::draw::language_color;
use super::super::state::{DashboardData, TuiState};
use super::{legend_line, section_title};
use crate::model::VisualBucket;

/// Render the profile card, repository card and the commit/PR bar charts.
pub fn draw_dashboard(f: &mut Frame, area: Rect, data: &DashboardData, state: &TuiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(8),
            Constraint::Length(7),
            Constraint::Length(3),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    draw_profile_card(f, cards[0], data);
    draw_repo_card(f, cards[1], data);
    draw_bar_chart(f, rows[1], &data.visuals, state, Metric::Commits);
    draw_bar_chart(f, rows[2], &data.visuals, state, Metric::PullRequests);

    let mut footer = vec![legend_line(&data.palette)];
    if let Some(status) = state.current_status() {
        footer.push(Line::styled(status.to_string(), Style::default().fg(Color::Green)));
    }
    let legend = Paragraph::new(footer).block(Block::default().borders(Borders::TOP));
    f.render_widget(legend, rows[3]);
}

fn draw_profile_card(f: &mut Frame, area: Rect, data: &DashboardData) {
    let block = Block::default()
        .title("Profile")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let Some(card) = &data.profile else {
        f.render_widget(Paragraph::new("No profile available").block(block), area);
        return;
    };

    let mut lines = vec![Line::from(vec![Span::styled(
        card.username.clone(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )])];
    for (label, value) in card.lines() {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::White)),
            Span::styled(value, Style::default().fg(Color::Yellow)),
        ]));
    }
    lines.push(Line::styled(
        card.bio.clone(),
        Style::default().add_modifier(Modifier::ITALIC),
    ));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_repo_card(f: &mut Frame, area: Rect, data: &DashboardData) {
    let block = Block::default()
        .title("Repository")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let Some(card) = data.repos.first() else {
        f.render_widget(
            Paragraph::new("No repository analysis available").block(block),
            area,
        );
        return;
    };

    let mut lines = vec![section_title(&card.title())];
    let stats: Vec<Span> = card
        .stat_lines()
        .iter()
        .flat_map(|(label, value)| {
            [
                Span::styled(format!("{label}: "), Style::default().fg(Color::White)),
                Span::styled(format!("{value}  "), Style::default().fg(Color::Cyan)),
            ]
        })
        .collect();
    lines.push(Line::from(stats));
    for paragraph in &card.narrative {
        lines.push(Line::from(""));
        lines.push(Line::from(paragraph.clone()));
    }
    if data.repos.len() > 1 {
        lines.push(Line::styled(
            format!("… (+{} more repositories)", data.repos.len() - 1),
            Style::default().fg(Color::Gray),
        ));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[derive(Clone, Copy)]
enum Metric {
    Commits,
    PullRequests,
}

fn draw_bar_chart(f: &mut Frame, area: Rect, visuals: &[VisualBucket], state: &TuiState, metric: Metric) {
    let title = match metric {
        Metric::Commits => "Commits over time",
        Metric::PullRequests => "Pull requests over time",
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if visuals.is_empty() {
        f.render_widget(Paragraph::new("No data to display").block(block), area);
        return;
    }

    let bars: Vec<Bar> = visuals
        .iter()
        .enumerate()
        .map(|(i, visual)| {
            let (fraction, count, color) = match metric {
                Metric::Commits => (
                    visual.commit_height_fraction,
                    visual.bucket.total_commits,
                    language_color(&visual.color),
                ),
                Metric::PullRequests => (
                    visual.pr_height_fraction,
                    visual.bucket.pull_request_count,
                    Color::DarkGray,
                ),
            };
            let mut style = Style::default().fg(color);
            if i == state.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Bar::default()
                .value((fraction * 100.0).round() as u64)
                .text_value(count.to_string())
                .label(Line::from(visual.bucket.start_date.format("%Y-%m").to_string()))
                .style(style)
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let count = u16::try_from(bars.len()).unwrap_or(u16::MAX);
    let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 12);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100);
    f.render_widget(chart, area);
}
