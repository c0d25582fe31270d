use std::io;
use thiserror::Error;

pub type AzResult<T> = Result<T, AzError>;

#[derive(Debug, Error)]
pub enum AzError {
    #[error("Azure CLI (az) executable not found. Install Azure CLI to continue.")]
    AzNotInstalled,
    #[error("Azure CLI returned that you are not logged in. Run `az login`.")]
    NotLoggedIn,
    #[error("Azure CLI command failed with code {code:?}: {stderr}")]
    CommandFailure { code: Option<i32>, stderr: String },
    #[error("Failed to parse Azure CLI response at '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Azure CLI response too large: {0} bytes")]
    ResponseTooLarge(usize),
    #[error("{field} value '{value}' is not an integer")]
    InvalidNumber { field: String, value: String },
    #[error("Quota limit {limit} minus current usage {current} is out of range")]
    QuotaOverflow { current: i64, limit: i64 },
    #[error("Failed to execute Azure CLI: {0}")]
    Io(#[from] io::Error),
}
