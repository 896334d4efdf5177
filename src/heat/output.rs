use crate::heat::{BucketPolicy, Palette};
use crate::model::{HeatOutput, VisualBucket, SCHEMA_VERSION};
use crate::util::{ansi256, date_span, parse_hex_color};
use anyhow::Result;
use chrono::Utc;
use console::{style, Style};

const COMMIT_LEVELS: [&str; 6] = [" ", "▁", "▃", "▅", "▇", "█"];
const PR_LEVELS: [&str; 6] = [" ", "░", "░", "▒", "▓", "█"];

pub fn output_json(
    visuals: &[VisualBucket],
    username: Option<&str>,
    time_frames: usize,
    policy: BucketPolicy,
) -> Result<()> {
    let output = HeatOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.map(str::to_string),
        time_frames,
        policy,
        buckets: visuals.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(visuals: &[VisualBucket]) -> Result<()> {
    for bucket in visuals {
        println!("{}", serde_json::to_string(bucket)?);
    }
    Ok(())
}

pub fn output_heatmap(visuals: &[VisualBucket], palette: &Palette) -> Result<()> {
    println!("{}", style("Contribution Heatmap").bold());
    println!("{}", "─".repeat(60));

    if visuals.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    for visual in visuals {
        let bucket = &visual.bucket;
        let language = bucket.dominant_language.as_deref().unwrap_or(crate::heat::OTHER);
        println!(
            "{:<25} {} {} {} commits: {:>4}, PRs: {:>3}  {}",
            date_span(bucket.start_date, bucket.end_date),
            style(level(&COMMIT_LEVELS, visual.commit_height_fraction)).white(),
            style(level(&PR_LEVELS, visual.pr_height_fraction)).dim(),
            swatch_style(&visual.color).apply_to("■"),
            bucket.total_commits,
            bucket.pull_request_count,
            language,
        );
    }

    println!("\n{}", style("Legend").bold());
    println!("  {} commits over time", style("▁▃▅▇█").white());
    println!("  {} pull requests over time", style("░▒▓█").dim());
    let languages: Vec<String> = palette
        .legend()
        .map(|(name, color)| format!("{} {}", swatch_style(color).apply_to("■"), name))
        .collect();
    println!("  {}", languages.join("  "));

    Ok(())
}

pub fn level(levels: &[&'static str], fraction: f64) -> &'static str {
    let top = levels.len() - 1;
    let idx = ((fraction.clamp(0.0, 1.0) * top as f64).round() as usize).min(top);
    levels[idx]
}

pub fn swatch_style(color: &str) -> Style {
    match parse_hex_color(color) {
        Some((r, g, b)) => Style::new().color256(ansi256(r, g, b)),
        None => Style::new().white(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_picks_glyph_by_fraction() {
        assert_eq!(level(&COMMIT_LEVELS, 0.0), " ");
        assert_eq!(level(&COMMIT_LEVELS, 1.0), "█");
        assert_eq!(level(&COMMIT_LEVELS, 0.5), "▅");
        assert_eq!(level(&COMMIT_LEVELS, 7.0), "█");
    }
}
