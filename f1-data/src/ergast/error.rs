//! Ergast client error types.

/// Errors from the Ergast HTTP client.
///
/// Every variant means the remote source could not be used; the resolver
/// treats them all the same way and falls back to the static snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ErgastError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not JSON, or did not have the expected shape
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Client could not be configured
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Mock client has no data for the request
    #[error("mock error: {message}")]
    Mock { message: String },
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
