use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashError>;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("Analysis service returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Username is required")]
    MissingUsername,
    #[error("Invalid palette: {0}")]
    Palette(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

// ureq::Error is large, keep the enum small by boxing it
impl From<ureq::Error> for DashError {
    fn from(err: ureq::Error) -> Self {
        DashError::Http(Box::new(err))
    }
}

impl From<arboard::Error> for DashError {
    fn from(err: arboard::Error) -> Self {
        DashError::Clipboard(err.to_string())
    }
}
