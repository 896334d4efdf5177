use crate::cli::CommonArgs;
use crate::model::UserProfile;
use crate::source::load_payload;
use anyhow::Context;
use chrono::{Datelike, Utc};
use console::style;
use serde::Serialize;

/// Display values for the profile card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub username: String,
    pub avatar_url: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: Option<u64>,
    pub bio: String,
    pub years_on_github: Option<i32>,
}

impl ProfileCard {
    pub fn new(profile: &UserProfile, current_year: i32) -> Self {
        Self {
            username: profile.username.clone(),
            avatar_url: profile.avatar_url.clone(),
            followers: profile.followers(),
            following: profile.following(),
            public_repos: profile.public_repos,
            bio: profile.bio_or_default().to_string(),
            years_on_github: profile.years_on_platform(current_year),
        }
    }

    pub fn from_profile(profile: &UserProfile) -> Self {
        Self::new(profile, Utc::now().year())
    }

    pub fn lines(&self) -> Vec<(String, String)> {
        let mut lines = vec![
            ("Followers".to_string(), self.followers.to_string()),
            ("Following".to_string(), self.following.to_string()),
        ];
        if let Some(repos) = self.public_repos {
            lines.push(("Public repos".to_string(), repos.to_string()));
        }
        lines.push((
            "# of years on GitHub".to_string(),
            self.years_on_github
                .map_or_else(|| "unknown".to_string(), |years| years.to_string()),
        ));
        lines
    }
}

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let payload = load_payload(&common, !json).context("Failed to load analysis payload")?;
    let profile = payload
        .user_profile
        .context("Analysis payload has no user profile")?;
    let card = ProfileCard::from_profile(&profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        output_card(&card);
    }
    Ok(())
}

pub fn output_card(card: &ProfileCard) {
    println!("{}", style(&card.username).bold().cyan());
    println!("{}", "─".repeat(50));
    for (label, value) in card.lines() {
        println!("{:<22} {}", format!("{label}:"), style(value).yellow());
    }
    println!("{}", style(&card.bio).italic());
    if let Some(url) = &card.avatar_url {
        println!("{}", style(url).dim());
    }
}
