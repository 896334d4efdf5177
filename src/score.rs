use crate::cli::CommonArgs;
use crate::model::RepoAnalysis;
use crate::source::load_payload;
use anyhow::Context;
use console::style;
use serde::Serialize;

/// Display values for one repository score card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoCard {
    pub repo_name: String,
    pub score: Option<f64>,
    pub quality: &'static str,
    pub category: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub watchers: u64,
    pub narrative: Vec<String>,
}

impl RepoCard {
    pub fn new(repo: &RepoAnalysis) -> Self {
        let stats = repo.stats();
        Self {
            repo_name: repo.repo_name.clone(),
            score: repo.overall_score,
            quality: repo.overall_score.map_or("Unscored", quality_label),
            category: repo.category.clone(),
            language: repo.language.clone(),
            stars: stats.stars.unwrap_or(0),
            forks: stats.forks.unwrap_or(0),
            open_issues: stats.open_issues.unwrap_or(0),
            watchers: stats.watchers.unwrap_or(0),
            narrative: repo
                .narrative
                .as_deref()
                .map(narrative_paragraphs)
                .unwrap_or_default(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} Score: {}", self.repo_name, self.quality)
    }

    pub fn stat_lines(&self) -> [(&'static str, u64); 4] {
        [
            ("Stars", self.stars),
            ("Forks", self.forks),
            ("Open Issues", self.open_issues),
            ("Watchers", self.watchers),
        ]
    }
}

/// Label for a score on the 0-100 scale.
pub fn quality_label(score: f64) -> &'static str {
    if score > 75.0 {
        "Excellent"
    } else if score > 50.0 {
        "Good"
    } else if score > 25.0 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

/// Split narrative text on blank lines, dropping empty paragraphs.
pub fn narrative_paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let payload = load_payload(&common, !json).context("Failed to load analysis payload")?;
    let cards: Vec<RepoCard> = payload.repo_analysis.iter().map(RepoCard::new).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
        output_cards(&cards);
    }
    Ok(())
}

pub fn output_cards(cards: &[RepoCard]) {
    if cards.is_empty() {
        println!("No repository analysis available");
        return;
    }

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", style(card.title()).bold());
        println!("{}", "─".repeat(50));
        for (label, value) in card.stat_lines() {
            println!("{:<13} {}", format!("{label}:"), style(value).cyan());
        }
        if let Some(score) = card.score {
            println!("{:<13} {}", "Score:", style(format!("{score:.2}")).yellow());
        }
        if let Some(category) = &card.category {
            println!("{:<13} {}", "Category:", style(category).magenta());
        }
        for paragraph in &card.narrative {
            println!("\n{paragraph}");
        }
    }
}
