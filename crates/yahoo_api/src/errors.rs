use thiserror::Error;

/// Errors raised while talking to Yahoo or turning its chart into bars.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, TLS failure, unreadable body.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status without a chart document to explain it.
    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// A row that cannot be represented as a bar.
    #[error("Conversion error: {0}")]
    Conversion(String),
}
