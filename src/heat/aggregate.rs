use crate::model::{dominant_language, ContributionRecord, DisplayBucket};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_TIME_FRAMES: usize = 10;

/// How a run of consecutive records is folded into one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BucketPolicy {
    /// Take the first record of the run as the bucket's values.
    #[default]
    Sample,
    /// Sum commits and pull requests across the run.
    Sum,
}

/// Partition the date-sorted history into at most `time_frames` contiguous
/// runs of `ceil(len / time_frames)` records each.
///
/// Buckets whose run would start past the end of the history are dropped,
/// so the result may be shorter than `time_frames`.
pub fn aggregate(
    history: &[ContributionRecord],
    time_frames: usize,
    policy: BucketPolicy,
) -> Vec<DisplayBucket> {
    if history.is_empty() || time_frames == 0 {
        return Vec::new();
    }

    let mut sorted: Vec<&ContributionRecord> = history.iter().collect();
    sorted.sort_by_key(|record| record.date);

    let frames_per_section = sorted.len().div_ceil(time_frames);
    let mut buckets = Vec::with_capacity(time_frames);

    for index in 0..time_frames {
        let start = index * frames_per_section;
        if start >= sorted.len() {
            debug!(index, start, records = sorted.len(), "no records backing bucket, skipping");
            continue;
        }
        let end = ((index + 1) * frames_per_section).min(sorted.len());
        let run = &sorted[start..end];

        buckets.push(match policy {
            BucketPolicy::Sample => sample(run),
            BucketPolicy::Sum => sum(run),
        });
    }

    buckets
}

// Both helpers are only called with a non-empty run.
fn sample(run: &[&ContributionRecord]) -> DisplayBucket {
    let first = run[0];
    DisplayBucket {
        start_date: first.date,
        end_date: run[run.len() - 1].date,
        total_commits: first.total_commits,
        pull_request_count: first.pull_request_count(),
        dominant_language: first.dominant_language.clone(),
    }
}

fn sum(run: &[&ContributionRecord]) -> DisplayBucket {
    let first = run[0];
    let mut languages: BTreeMap<String, u64> = BTreeMap::new();
    let mut total_commits = 0u64;
    let mut pull_request_count = 0u64;

    for record in run {
        total_commits = total_commits.saturating_add(record.total_commits);
        pull_request_count = pull_request_count.saturating_add(record.pull_request_count());
        for (lang, count) in &record.language_breakdown {
            let entry = languages.entry(lang.clone()).or_insert(0);
            *entry = entry.saturating_add(*count);
        }
    }

    let dominant_language = dominant_language(&languages)
        .map(str::to_string)
        .or_else(|| first.dominant_language.clone());

    DisplayBucket {
        start_date: first.date,
        end_date: run[run.len() - 1].date,
        total_commits,
        pull_request_count,
        dominant_language,
    }
}
