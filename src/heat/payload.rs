use crate::model::{ContributionRecord, DisplayBucket};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The `heatmap_data` section of an analysis payload.
///
/// The service emits a map keyed by ISO date; older deployments emitted
/// pre-bucketed entries keyed by time index (or as a plain list). Entries
/// stay as raw JSON here so one bad entry is skipped at decode time instead
/// of failing the whole payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HeatmapData {
    Keyed(BTreeMap<String, Value>),
    List(Vec<Value>),
    Unrecognized(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDayEntry {
    pub total_commits: u64,
    #[serde(default)]
    pub languages: BTreeMap<String, u64>,
    #[serde(default)]
    pub contribution_types: BTreeMap<String, u64>,
    #[serde(default)]
    pub insights: Option<RawInsights>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInsights {
    #[serde(default)]
    pub most_used_language: Option<Value>,
    #[serde(default)]
    pub significant_prs: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndexedBucket {
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub total_commits: u64,
    #[serde(default)]
    pub pull_requests: u64,
    #[serde(default)]
    pub dominant_language: Option<Value>,
}

impl HeatmapData {
    pub fn is_empty(&self) -> bool {
        match self {
            HeatmapData::Keyed(entries) => entries.is_empty(),
            HeatmapData::List(entries) => entries.is_empty(),
            HeatmapData::Unrecognized(_) => true,
        }
    }
}

/// Either raw per-day history that still needs bucketing, or buckets the
/// service already computed.
#[derive(Debug, Clone, PartialEq)]
pub enum History {
    Records(Vec<ContributionRecord>),
    Buckets(Vec<DisplayBucket>),
}

pub fn decode(data: &HeatmapData) -> History {
    match data {
        HeatmapData::Keyed(entries) if is_indexed(entries) => {
            let mut indexed: Vec<(usize, &Value)> = entries
                .iter()
                .filter_map(|(key, entry)| match key.trim().parse::<usize>() {
                    Ok(index) => Some((index, entry)),
                    Err(_) => {
                        warn!(key = %key, "non-numeric heatmap bucket index, skipping");
                        None
                    }
                })
                .collect();
            indexed.sort_by_key(|(index, _)| *index);
            History::Buckets(
                indexed
                    .into_iter()
                    .filter_map(|(_, entry)| decode_bucket(entry))
                    .collect(),
            )
        }
        HeatmapData::Keyed(entries) => History::Records(
            entries
                .iter()
                .filter_map(|(key, entry)| decode_day(key, entry))
                .collect(),
        ),
        HeatmapData::List(entries) => {
            History::Buckets(entries.iter().filter_map(decode_bucket).collect())
        }
        HeatmapData::Unrecognized(value) => {
            warn!(value = %value, "heatmap data is neither a map nor a list, ignoring");
            History::Records(Vec::new())
        }
    }
}

// Pre-bucketed entries carry their own start date.
fn is_indexed(entries: &BTreeMap<String, Value>) -> bool {
    entries.values().any(|entry| entry.get("startDate").is_some())
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts unpadded fields, which would let `2024-1-1` and
/// `2024-01-01` name the same day.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
}

fn decode_day(key: &str, value: &Value) -> Option<ContributionRecord> {
    let Some(date) = parse_date(key) else {
        warn!(key = %key, "invalid date key in heatmap data, skipping entry");
        return None;
    };
    let entry = match RawDayEntry::deserialize(value) {
        Ok(entry) => entry,
        Err(e) => {
            warn!(key = %key, error = %e, "malformed heatmap entry, skipping");
            return None;
        }
    };

    let insights = entry.insights.unwrap_or_default();
    Some(ContributionRecord::new(
        date,
        entry.total_commits,
        entry.languages,
        entry.contribution_types,
        language_name(insights.most_used_language.as_ref()),
        insights.significant_prs.as_ref().and_then(Value::as_bool),
    ))
}

fn decode_bucket(value: &Value) -> Option<DisplayBucket> {
    let raw = match RawIndexedBucket::deserialize(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "malformed heatmap bucket, skipping");
            return None;
        }
    };
    let Some(start_date) = parse_date(&raw.start_date) else {
        warn!(start_date = %raw.start_date, "invalid bucket start date, skipping bucket");
        return None;
    };
    let end_date = raw
        .end_date
        .as_deref()
        .and_then(parse_date)
        .map_or(start_date, |end| end.max(start_date));

    Some(DisplayBucket {
        start_date,
        end_date,
        total_commits: raw.total_commits,
        pull_request_count: raw.pull_requests,
        dominant_language: language_name(raw.dominant_language.as_ref()),
    })
}

/// Anything other than a non-empty string counts as "no language". Names are
/// kept verbatim so palette lookups stay exact.
fn language_name(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
