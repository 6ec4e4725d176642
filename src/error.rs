//! Error types for the dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! Nothing here is fatal: fetch failures are surfaced and the next tick retries.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Failure of one metrics fetch.
///
/// All variants are shown to the user the same way; the split only helps logs.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request never produced a response (DNS, CORS, offline...)
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not a valid metrics payload
    #[error("invalid metrics payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint could not be turned into an absolute URL
    #[error("invalid endpoint URL: {0}")]
    Url(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metrics fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Missing or mistyped page elements
    #[error("DOM error: {0}")]
    Dom(String),

    /// Chart library errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// JSON errors outside the fetch path (chart configs)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<DashboardError> for wasm_bindgen::JsValue {
    fn from(err: DashboardError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
