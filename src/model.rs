use crate::heat::{BucketPolicy, HeatmapData};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

pub const PULL_REQUEST: &str = "pull_request";

/// One day of contribution history as produced by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub date: NaiveDate,
    pub total_commits: u64,
    pub language_breakdown: BTreeMap<String, u64>,
    pub contribution_type_breakdown: BTreeMap<String, u64>,
    pub dominant_language: Option<String>,
    pub has_significant_prs: bool,
}

impl ContributionRecord {
    /// Build a record, deriving the dominant language and PR flag from the
    /// breakdowns when the service did not supply them.
    pub fn new(
        date: NaiveDate,
        total_commits: u64,
        language_breakdown: BTreeMap<String, u64>,
        contribution_type_breakdown: BTreeMap<String, u64>,
        most_used_language: Option<String>,
        significant_prs: Option<bool>,
    ) -> Self {
        let dominant_language = most_used_language
            .filter(|lang| !lang.is_empty())
            .or_else(|| dominant_language(&language_breakdown).map(str::to_string));
        let has_significant_prs =
            significant_prs.unwrap_or_else(|| contribution_type_breakdown.contains_key(PULL_REQUEST));

        Self {
            date,
            total_commits,
            language_breakdown,
            contribution_type_breakdown,
            dominant_language,
            has_significant_prs,
        }
    }

    pub fn pull_request_count(&self) -> u64 {
        self.contribution_type_breakdown
            .get(PULL_REQUEST)
            .copied()
            .unwrap_or(0)
    }
}

/// Language with the highest count; ties go to the first key in map order.
pub fn dominant_language(breakdown: &BTreeMap<String, u64>) -> Option<&str> {
    let mut best: Option<(&str, u64)> = None;
    for (lang, &count) in breakdown {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((lang.as_str(), count)),
        }
    }
    best.map(|(lang, _)| lang)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayBucket {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_commits: u64,
    pub pull_request_count: u64,
    pub dominant_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualBucket {
    #[serde(flatten)]
    pub bucket: DisplayBucket,
    pub commit_height_fraction: f64,
    pub pr_height_fraction: f64,
    pub color: String,
}

/// Follower counts arrive either as a plain number or as a GraphQL connection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Plain(u64),
    Connection {
        #[serde(rename = "totalCount")]
        total_count: u64,
    },
}

impl Count {
    pub fn get(self) -> u64 {
        match self {
            Count::Plain(n) => n,
            Count::Connection { total_count } => total_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "login")]
    pub username: String,
    #[serde(default, alias = "avatarUrl")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub years_on_github: Option<i32>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub followers: Option<Count>,
    #[serde(default)]
    pub following: Option<Count>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserProfile {
    pub fn years_on_platform(&self, current_year: i32) -> Option<i32> {
        self.years_on_github
            .or_else(|| self.created_at.map(|created| current_year - created.year()))
    }

    pub fn followers(&self) -> u64 {
        self.followers.map(Count::get).unwrap_or(0)
    }

    pub fn following(&self) -> u64 {
        self.following.map(Count::get).unwrap_or(0)
    }

    pub fn bio_or_default(&self) -> &str {
        match self.bio.as_deref().map(str::trim) {
            Some(bio) if !bio.is_empty() => bio,
            _ => "No bio available",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoStats {
    #[serde(default)]
    pub stars: Option<u64>,
    #[serde(default)]
    pub forks: Option<u64>,
    #[serde(default)]
    pub open_issues: Option<u64>,
    #[serde(default)]
    pub watchers: Option<u64>,
    #[serde(default)]
    pub issues_closed: Option<u64>,
}

impl RepoStats {
    fn fill_from(self, other: &RepoStats) -> RepoStats {
        RepoStats {
            stars: self.stars.or(other.stars),
            forks: self.forks.or(other.forks),
            open_issues: self.open_issues.or(other.open_issues),
            watchers: self.watchers.or(other.watchers),
            issues_closed: self.issues_closed.or(other.issues_closed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoAnalysis {
    #[serde(alias = "name")]
    pub repo_name: String,
    #[serde(default, alias = "score")]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub narrative: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(flatten)]
    pub stats: RepoStats,
    #[serde(default)]
    pub details: Option<RepoStats>,
}

impl RepoAnalysis {
    /// Top-level statistics take precedence over the nested `details` block.
    pub fn stats(&self) -> RepoStats {
        match &self.details {
            Some(details) => self.stats.clone().fill_from(details),
            None => self.stats.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub repo_analysis: Vec<RepoAnalysis>,
    #[serde(default)]
    pub heatmap_data: Option<HeatmapData>,
    #[serde(default)]
    pub readme_analysis: Option<serde_json::Value>,
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<RepoAnalysis>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(RepoAnalysis),
        Many(Vec<RepoAnalysis>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(repo)) => vec![repo],
        Some(OneOrMany::Many(repos)) => repos,
        None => Vec::new(),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: Option<String>,
    pub time_frames: usize,
    pub policy: BucketPolicy,
    pub buckets: Vec<VisualBucket>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub user_profile: Option<UserProfile>,
    pub repo_analysis: Vec<RepoAnalysis>,
    pub heatmap: Vec<VisualBucket>,
    pub readme_analysis: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn langs(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn dominant_language_prefers_highest_count() {
        let breakdown = langs(&[("Python", 2), ("Rust", 5), ("Go", 1)]);
        assert_eq!(dominant_language(&breakdown), Some("Rust"));
    }

    #[test]
    fn dominant_language_tie_goes_to_first_key() {
        let breakdown = langs(&[("TypeScript", 3), ("JavaScript", 3)]);
        assert_eq!(dominant_language(&breakdown), Some("JavaScript"));
        assert_eq!(dominant_language(&BTreeMap::new()), None);
    }

    #[test]
    fn record_prefers_supplied_language_and_flag() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let record = ContributionRecord::new(
            date,
            4,
            langs(&[("Python", 4)]),
            langs(&[("commit", 4)]),
            Some("Java".into()),
            Some(true),
        );
        assert_eq!(record.dominant_language.as_deref(), Some("Java"));
        assert!(record.has_significant_prs);
        assert_eq!(record.pull_request_count(), 0);
    }

    #[test]
    fn record_derives_missing_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let record = ContributionRecord::new(
            date,
            4,
            langs(&[("Python", 4)]),
            langs(&[("pull_request", 2)]),
            Some(String::new()),
            None,
        );
        assert_eq!(record.dominant_language.as_deref(), Some("Python"));
        assert!(record.has_significant_prs);
        assert_eq!(record.pull_request_count(), 2);
    }

    #[test]
    fn profile_accepts_graphql_shape() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "login": "octocat",
                "avatarUrl": "https://example.com/a.png",
                "createdAt": "2018-05-01T10:00:00Z",
                "bio": "",
                "followers": {"totalCount": 12},
                "following": {"totalCount": 3}
            }"#,
        )
        .unwrap();
        assert_eq!(profile.username, "octocat");
        assert_eq!(profile.followers(), 12);
        assert_eq!(profile.following(), 3);
        assert_eq!(profile.years_on_platform(2024), Some(6));
        assert_eq!(profile.bio_or_default(), "No bio available");
    }

    #[test]
    fn profile_accepts_service_shape() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"username": "octocat", "avatar_url": null, "years_on_github": 4,
                "public_repos": 8, "followers": 10, "following": 2, "bio": "hi"}"#,
        )
        .unwrap();
        assert_eq!(profile.years_on_platform(2030), Some(4));
        assert_eq!(profile.followers(), 10);
        assert_eq!(profile.bio_or_default(), "hi");
    }

    #[test]
    fn repo_analysis_accepts_single_object_and_details() {
        let payload: AnalysisPayload = serde_json::from_str(
            r#"{"repo_analysis": {"repo_name": "demo", "score": 42.5, "category": "Good",
                "details": {"stars": 7, "forks": 1, "open_issues": 0, "watchers": 7}}}"#,
        )
        .unwrap();
        assert_eq!(payload.repo_analysis.len(), 1);
        let repo = &payload.repo_analysis[0];
        assert_eq!(repo.overall_score, Some(42.5));
        assert_eq!(repo.stats().stars, Some(7));
        assert!(payload.heatmap_data.is_none());
    }

    #[test]
    fn repo_analysis_accepts_list_and_null() {
        let payload: AnalysisPayload = serde_json::from_str(
            r#"{"repo_analysis": [{"name": "a", "language": "Rust"}, {"repo_name": "b", "stars": 3}]}"#,
        )
        .unwrap();
        assert_eq!(payload.repo_analysis.len(), 2);
        assert_eq!(payload.repo_analysis[1].stats().stars, Some(3));

        let payload: AnalysisPayload = serde_json::from_str(r#"{"repo_analysis": null}"#).unwrap();
        assert!(payload.repo_analysis.is_empty());
    }
}
