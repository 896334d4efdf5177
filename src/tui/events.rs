use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::error::Result;
use crate::model::VisualBucket;
use crate::util::date_span;

use super::state::{DashboardData, TuiState};

/// Handle a keyboard event, mutating TUI state and returning `true` if the loop should exit.
pub fn handle_key_events(key_event: KeyEvent, state: &mut TuiState, data: &DashboardData) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    if state.show_help {
        if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)) {
            state.show_help = false;
        } else if key_event.code == KeyCode::Char('q') {
            return true;
        }
        return false;
    }

    let len = data.visuals.len();
    match key_event.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Tab | KeyCode::BackTab => state.view_mode = state.view_mode.toggle(),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => {
            if state.selected + 1 < len {
                state.selected += 1;
            }
        }
        KeyCode::Home | KeyCode::Char('g') => state.selected = 0,
        KeyCode::End | KeyCode::Char('G') => state.selected = len.saturating_sub(1),
        KeyCode::Char('c') => copy_selected(state, data),
        _ => {}
    }

    false
}

/// Copy a one-line summary of the selected bucket, surfacing clipboard errors in status.
fn copy_selected(state: &mut TuiState, data: &DashboardData) {
    let Some(visual) = data.visuals.get(state.selected) else {
        state.set_status("Nothing to copy");
        return;
    };
    let summary = bucket_summary(visual);
    match copy_to_clipboard(&summary) {
        Ok(()) => state.set_status(format!("Copied: {summary}")),
        Err(err) => state.set_status(format!("{err}")),
    }
}

pub fn bucket_summary(visual: &VisualBucket) -> String {
    let bucket = &visual.bucket;
    format!(
        "{}: {} commits, {} PRs, {}",
        date_span(bucket.start_date, bucket.end_date),
        bucket.total_commits,
        bucket.pull_request_count,
        bucket.dominant_language.as_deref().unwrap_or(crate::heat::OTHER),
    )
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heat::Palette;
    use crate::model::DisplayBucket;
    use crate::tui::state::ViewMode;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn data(n: usize) -> DashboardData {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let visuals = (0..n)
            .map(|i| VisualBucket {
                bucket: DisplayBucket {
                    start_date: date,
                    end_date: date,
                    total_commits: i as u64,
                    pull_request_count: 0,
                    dominant_language: None,
                },
                commit_height_fraction: 0.0,
                pr_height_fraction: 0.0,
                color: "#808080".to_string(),
            })
            .collect();
        DashboardData {
            profile: None,
            repos: Vec::new(),
            visuals,
            palette: Palette::default(),
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let data = data(3);
        let mut state = TuiState::default();
        handle_key_events(press(KeyCode::Left), &mut state, &data);
        assert_eq!(state.selected, 0);
        for _ in 0..5 {
            handle_key_events(press(KeyCode::Right), &mut state, &data);
        }
        assert_eq!(state.selected, 2);
        handle_key_events(press(KeyCode::Home), &mut state, &data);
        assert_eq!(state.selected, 0);
        handle_key_events(press(KeyCode::End), &mut state, &data);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn empty_chart_keeps_selection_at_zero() {
        let data = data(0);
        let mut state = TuiState::default();
        handle_key_events(press(KeyCode::End), &mut state, &data);
        handle_key_events(press(KeyCode::Right), &mut state, &data);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn tab_help_and_quit() {
        let data = data(1);
        let mut state = TuiState::default();
        assert!(!handle_key_events(press(KeyCode::Tab), &mut state, &data));
        assert_eq!(state.view_mode, ViewMode::Buckets);
        handle_key_events(press(KeyCode::Char('h')), &mut state, &data);
        assert!(state.show_help);
        handle_key_events(press(KeyCode::Esc), &mut state, &data);
        assert!(!state.show_help);
        assert!(handle_key_events(press(KeyCode::Char('q')), &mut state, &data));
    }

    #[test]
    fn summary_names_other_for_missing_language() {
        let data = data(2);
        assert_eq!(bucket_summary(&data.visuals[1]), "2024-05-01: 1 commits, 0 PRs, Other");
    }
}
