use crate::cli::CommonArgs;
use crate::error::{DashError, Result};
use crate::model::AnalysisPayload;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
const ANALYZE_PATH: &str = "/api/analyze";

/// Load the analysis payload from `--input` if given, otherwise fetch it
/// from the analysis service.
pub fn load_payload(common: &CommonArgs, show_progress: bool) -> Result<AnalysisPayload> {
    match common.input.as_deref() {
        Some(path) => read_payload(path),
        None => {
            let username = require_username(common.user.as_deref())?;
            fetch_payload(&common.endpoint, username, common.timeout, show_progress)
        }
    }
}

pub fn require_username(user: Option<&str>) -> Result<&str> {
    match user.map(str::trim) {
        Some(user) if !user.is_empty() => Ok(user),
        _ => Err(DashError::MissingUsername),
    }
}

/// Read a saved payload; `-` reads standard input.
pub fn read_payload(path: &Path) -> Result<AnalysisPayload> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    debug!(path = %path.display(), bytes = raw.len(), "read analysis payload");
    Ok(serde_json::from_str(&raw)?)
}

pub fn analyze_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), ANALYZE_PATH)
}

/// Single GET against the analysis service. No retries.
pub fn fetch_payload(
    endpoint: &str,
    username: &str,
    timeout: Duration,
    show_progress: bool,
) -> Result<AnalysisPayload> {
    let url = analyze_url(endpoint);
    info!(url = %url, username, "requesting analysis");

    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Analyzing {username}..."));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let agent = ureq::AgentBuilder::new().timeout(timeout).build();
    let result = agent
        .get(&url)
        .set("Accept", "application/json")
        .set("User-Agent", concat!("ghdash/", env!("CARGO_PKG_VERSION")))
        .query("username", username)
        .call();

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => return Err(DashError::Status { status, url }),
        Err(e) => return Err(e.into()),
    };

    let body = response.into_string()?;
    debug!(bytes = body.len(), "received analysis payload");
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn analyze_url_joins_cleanly() {
        assert_eq!(analyze_url("http://localhost:8000/"), "http://localhost:8000/api/analyze");
        assert_eq!(analyze_url("https://svc.example"), "https://svc.example/api/analyze");
    }

    #[test]
    fn username_is_required() {
        assert!(matches!(require_username(None), Err(DashError::MissingUsername)));
        assert!(matches!(require_username(Some("  ")), Err(DashError::MissingUsername)));
        assert_eq!(require_username(Some(" octocat ")).unwrap(), "octocat");
    }

    #[test]
    fn reads_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"user_profile": {{"username": "octocat"}}, "heatmap_data": {{}}}}"#
        )
        .unwrap();
        let payload = read_payload(file.path()).unwrap();
        assert_eq!(payload.user_profile.unwrap().username, "octocat");
        assert!(payload.heatmap_data.unwrap().is_empty());
    }

    #[test]
    fn malformed_payload_is_a_serde_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(read_payload(file.path()), Err(DashError::Serde(_))));
    }
}
