pub mod aggregate;
pub mod exec;
pub mod output;
pub mod payload;
pub mod render;

pub use aggregate::{aggregate, BucketPolicy, DEFAULT_TIME_FRAMES};
pub use exec::exec;
pub use output::{output_heatmap, output_json, output_ndjson};
pub use payload::{decode, HeatmapData, History};
pub use render::{compute_visuals, Palette, PaletteEntry, OTHER};

use crate::model::{DisplayBucket, VisualBucket};

/// Turn the payload's heatmap section into display buckets. Pre-bucketed
/// data from the service is passed through as-is.
pub fn display_buckets(
    data: Option<&HeatmapData>,
    time_frames: usize,
    policy: BucketPolicy,
) -> Vec<DisplayBucket> {
    match data.map(decode) {
        Some(History::Records(records)) => aggregate(&records, time_frames, policy),
        Some(History::Buckets(buckets)) => buckets,
        None => Vec::new(),
    }
}

pub fn visual_buckets(
    data: Option<&HeatmapData>,
    time_frames: usize,
    policy: BucketPolicy,
    palette: &Palette,
) -> Vec<VisualBucket> {
    compute_visuals(&display_buckets(data, time_frames, policy), palette)
}
