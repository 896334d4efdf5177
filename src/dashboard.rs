use crate::cli::CommonArgs;
use crate::heat::{output_heatmap, visual_buckets, Palette};
use crate::model::{DashboardOutput, SCHEMA_VERSION};
use crate::profile::{output_card, ProfileCard};
use crate::score::{output_cards, RepoCard};
use crate::source::load_payload;
use crate::tui::{self, DashboardData, ViewMode};
use anyhow::Context;
use chrono::Utc;

pub fn exec(common: CommonArgs, json: bool, interactive: bool) -> anyhow::Result<()> {
    let palette = Palette::load(common.palette.as_deref()).context("Failed to load palette")?;
    let payload = load_payload(&common, !json).context("Failed to load analysis payload")?;

    let visuals = visual_buckets(
        payload.heatmap_data.as_ref(),
        common.time_frames,
        common.policy,
        &palette,
    );

    if interactive {
        let data = DashboardData::new(&payload, visuals, palette);
        return tui::run(data, ViewMode::Dashboard).context("Terminal UI failed");
    }

    if json {
        let output = DashboardOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            user_profile: payload.user_profile,
            repo_analysis: payload.repo_analysis,
            heatmap: visuals,
            readme_analysis: payload.readme_analysis,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &payload.user_profile {
        Some(profile) => output_card(&ProfileCard::from_profile(profile)),
        None => println!("No profile available"),
    }
    println!();
    let cards: Vec<RepoCard> = payload.repo_analysis.iter().map(RepoCard::new).collect();
    output_cards(&cards);
    println!();
    output_heatmap(&visuals, &palette)?;

    Ok(())
}
