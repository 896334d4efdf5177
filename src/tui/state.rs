use crate::heat::Palette;
use crate::model::{AnalysisPayload, VisualBucket};
use crate::profile::ProfileCard;
use crate::score::RepoCard;
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Everything the dashboard draws, computed once before the UI starts.
pub struct DashboardData {
    pub profile: Option<ProfileCard>,
    pub repos: Vec<RepoCard>,
    pub visuals: Vec<VisualBucket>,
    pub palette: Palette,
}

impl DashboardData {
    pub fn new(payload: &AnalysisPayload, visuals: Vec<VisualBucket>, palette: Palette) -> Self {
        Self {
            profile: payload.user_profile.as_ref().map(ProfileCard::from_profile),
            repos: payload.repo_analysis.iter().map(RepoCard::new).collect(),
            visuals,
            palette,
        }
    }
}

pub struct TuiState {
    pub selected: usize,
    pub view_mode: ViewMode,
    pub show_help: bool,
    pub status_message: Option<(String, Instant)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Dashboard,
    Buckets,
}

impl ViewMode {
    pub const TITLES: [&'static str; 2] = ["Dashboard", "Buckets"];

    pub fn index(self) -> usize {
        match self {
            ViewMode::Dashboard => 0,
            ViewMode::Buckets => 1,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Dashboard => ViewMode::Buckets,
            ViewMode::Buckets => ViewMode::Dashboard,
        }
    }
}

impl TuiState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            selected: 0,
            view_mode,
            show_help: false,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn current_status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < STATUS_TTL)
            .map(|(msg, _)| msg.as_str())
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(ViewMode::Dashboard)
    }
}
