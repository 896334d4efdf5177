use crate::heat::{BucketPolicy, DEFAULT_TIME_FRAMES};
use crate::source::DEFAULT_ENDPOINT;
use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "ghdash")]
#[command(about = "Dashboard for GitHub profile analysis: profile, repository scores and contribution heatmap")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[arg(long, short = 'u', help = "GitHub username to analyze")]
    pub user: Option<String>,

    #[arg(
        long,
        env = "GHDASH_ENDPOINT",
        default_value = DEFAULT_ENDPOINT,
        help = "Base URL of the analysis service"
    )]
    pub endpoint: String,

    #[arg(long, help = "Read a saved analysis payload instead of fetching ('-' for stdin)")]
    pub input: Option<PathBuf>,

    #[arg(
        long,
        default_value = "30s",
        value_parser = humantime::parse_duration,
        help = "Request timeout (e.g. 10s, 1m)"
    )]
    pub timeout: Duration,

    #[arg(long, help = "Path to a JSON language color palette")]
    pub palette: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = DEFAULT_TIME_FRAMES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "Number of heatmap buckets"
    )]
    pub time_frames: usize,

    #[arg(long, value_enum, default_value_t = BucketPolicy::Sample, help = "How records within a bucket are combined")]
    pub policy: BucketPolicy,

    #[arg(long, short = 'v', help = "Enable debug logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    Heat {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long = "interactive", alias = "tui", alias = "ui", help = "Enable interactive terminal UI")]
        interactive: bool,
    },
    Profile {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Repo {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Dashboard {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long = "interactive", alias = "tui", alias = "ui", help = "Enable interactive terminal UI")]
        interactive: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Heat { json, ndjson, interactive } => {
                crate::heat::exec(self.common, json, ndjson, interactive)
            }
            Commands::Profile { json } => crate::profile::exec(self.common, json),
            Commands::Repo { json } => crate::score::exec(self.common, json),
            Commands::Dashboard { json, interactive } => {
                crate::dashboard::exec(self.common, json, interactive)
            }
        }
    }
}
