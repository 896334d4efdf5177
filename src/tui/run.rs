use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Terminal;
use tracing::error;

use super::events::handle_key_events;
use super::state::{DashboardData, TuiState, ViewMode};
use super::views::{draw_buckets_view, draw_dashboard, draw_help_overlay};

pub fn run(data: DashboardData, view_mode: ViewMode) -> io::Result<()> {
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut state = TuiState::new(view_mode);

    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut state, &data);

    terminal.clear()?;
    disable_raw_mode()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    data: &DashboardData,
) -> io::Result<()> {
    loop {
        let draw_result = terminal.draw(|f| {
            let size = f.size();

            if state.show_help {
                draw_help_overlay(f, size);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(size);

            let tabs = Tabs::new(ViewMode::TITLES.to_vec())
                .block(Block::default().borders(Borders::ALL).title("ghdash"))
                .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .select(state.view_mode.index());
            f.render_widget(tabs, chunks[0]);

            match state.view_mode {
                ViewMode::Dashboard => draw_dashboard(f, chunks[1], data, state),
                ViewMode::Buckets => draw_buckets_view(f, chunks[1], data, state),
            }
        });

        if let Err(e) = draw_result {
            error!(error = %e, "TUI draw error");
        }

        if poll(Duration::from_millis(200))? {
            if let Event::Key(key_event) = read()? {
                if handle_key_events(key_event, state, data) {
                    return Ok(());
                }
            }
        }
    }
}
