pub mod cli;
pub mod dashboard;
pub mod error;
pub mod heat;
pub mod model;
pub mod profile;
pub mod score;
pub mod source;
pub mod tui;
pub mod util;

pub use error::{DashError, Result};
pub use heat::{aggregate, compute_visuals, BucketPolicy, Palette};
pub use model::{ContributionRecord, DisplayBucket, VisualBucket};
