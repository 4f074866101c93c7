// src/error.rs

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to the SSL Labs APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// The service did not answer (connect failure, timeout) or answered
    /// with HTTP 500/503.
    #[error("the ssllabs.com service is currently not available")]
    ServiceUnavailable {
        #[source]
        source: Option<reqwest::Error>,
    },

    /// HTTP 429 or 529. The service asks clients to back off; this crate
    /// never retries on its own.
    #[error("the ssllabs.com service is overloaded, reduce your usage or wait a bit")]
    ServiceOverloaded,

    /// Any other non-2xx response.
    #[error("the ssllabs.com service answered with HTTP status {0}")]
    HttpStatus(StatusCode),

    /// A request failure that is neither a connect/timeout problem nor an
    /// HTTP status, e.g. a failure while reading the response body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx payload that does not match the expected record shape, usually
    /// a required field missing.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The remote service reported an error of its own through an error
    /// envelope. Carries the first message verbatim.
    #[error("{0}")]
    Endpoint(String),
}
