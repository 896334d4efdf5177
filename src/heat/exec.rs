use crate::cli::CommonArgs;
use crate::heat::{output_heatmap, output_json, output_ndjson, visual_buckets, Palette};
use crate::source::load_payload;
use crate::tui::{self, DashboardData, ViewMode};
use anyhow::Context;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool, interactive: bool) -> anyhow::Result<()> {
    let palette = Palette::load(common.palette.as_deref()).context("Failed to load palette")?;
    let show_progress = !(json || ndjson);
    let payload = load_payload(&common, show_progress).context("Failed to load analysis payload")?;

    let visuals = visual_buckets(
        payload.heatmap_data.as_ref(),
        common.time_frames,
        common.policy,
        &palette,
    );

    if interactive {
        let data = DashboardData::new(&payload, visuals, palette);
        return tui::run(data, ViewMode::Buckets).context("Terminal UI failed");
    }

    let username = payload
        .user_profile
        .as_ref()
        .map(|p| p.username.as_str())
        .or(common.user.as_deref());

    if json {
        output_json(&visuals, username, common.time_frames, common.policy)?;
    } else if ndjson {
        output_ndjson(&visuals)?;
    } else {
        output_heatmap(&visuals, &palette)?;
    }

    Ok(())
}
