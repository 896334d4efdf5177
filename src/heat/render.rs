use crate::error::{DashError, Result};
use crate::model::{DisplayBucket, VisualBucket};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OTHER: &str = "Other";

/// Language to color table used for heatmap bars.
///
/// Lookups are case-sensitive and always succeed: anything not in the
/// table, including the empty string, gets the `Other` color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    languages: Vec<PaletteEntry>,
    other: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub color: String,
}

impl Default for Palette {
    fn default() -> Self {
        let entries = [
            ("Python", "#FF0000"),
            ("JavaScript", "#0000FF"),
            ("TypeScript", "#00FF00"),
            ("Java", "#FFA500"),
            ("C++", "#800080"),
        ];
        Self {
            languages: entries
                .iter()
                .map(|(name, color)| PaletteEntry {
                    name: name.to_string(),
                    color: color.to_string(),
                })
                .collect(),
            other: "#808080".to_string(),
        }
    }
}

impl Palette {
    pub fn new(languages: Vec<PaletteEntry>, other: impl Into<String>) -> Result<Self> {
        let palette = Self {
            languages,
            other: other.into(),
        };
        palette.validate()?;
        Ok(palette)
    }

    /// Load a palette from a JSON file of the form
    /// `{"languages": [{"name": "Rust", "color": "#DEA584"}], "other": "#808080"}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let palette: Palette = serde_json::from_str(&raw)?;
        palette.validate()?;
        Ok(palette)
    }

    /// The default palette unless a palette file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.other.trim().is_empty() {
            return Err(DashError::Palette("the Other color must not be empty".to_string()));
        }
        for entry in &self.languages {
            if entry.name.is_empty() {
                return Err(DashError::Palette("language names must not be empty".to_string()));
            }
            if entry.color.trim().is_empty() {
                return Err(DashError::Palette(format!(
                    "color for {} must not be empty",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    pub fn color_for(&self, language: &str) -> &str {
        self.languages
            .iter()
            .find(|entry| entry.name == language)
            .map_or(self.other.as_str(), |entry| entry.color.as_str())
    }

    pub fn color_for_language(&self, language: Option<&str>) -> &str {
        language.map_or(self.other.as_str(), |lang| self.color_for(lang))
    }

    pub fn other(&self) -> &str {
        &self.other
    }

    /// Named entries in declaration order, then `Other`.
    pub fn legend(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.languages
            .iter()
            .map(|entry| (entry.name.as_str(), entry.color.as_str()))
            .chain(std::iter::once((OTHER, self.other.as_str())))
    }
}

/// Attach bar heights and colors to each bucket.
///
/// Heights are relative to the largest value across `buckets`; a maximum of
/// zero gives every bucket a height of zero.
pub fn compute_visuals(buckets: &[DisplayBucket], palette: &Palette) -> Vec<VisualBucket> {
    let max_commits = buckets.iter().map(|b| b.total_commits).max().unwrap_or(0);
    let max_prs = buckets.iter().map(|b| b.pull_request_count).max().unwrap_or(0);

    buckets
        .iter()
        .map(|bucket| VisualBucket {
            bucket: bucket.clone(),
            commit_height_fraction: fraction(bucket.total_commits, max_commits),
            pr_height_fraction: fraction(bucket.pull_request_count, max_prs),
            color: palette
                .color_for_language(bucket.dominant_language.as_deref())
                .to_string(),
        })
        .collect()
}

pub fn fraction(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64).clamp(0.0, 1.0)
}
