// src/api/mod.rs

// One caller per remote operation. Each caller composes an `ApiClient`,
// which carries the base URL, the optional shared connection and the
// transport failure mapping.

pub mod analyze;
pub mod endpoint;
pub mod info;
pub mod register;
pub mod root_certs_raw;
pub mod status_codes;

pub use self::analyze::Analyze;
pub use self::endpoint::Endpoint;
pub use self::info::Info;
pub use self::register::Register;
pub use self::root_certs_raw::RootCertsRaw;
pub use self::status_codes::StatusCodes;

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::error::{Error, Result};

pub const SSLLABS_URL: &str = "https://api.ssllabs.com/api/v3/";
pub const SSLLABS_URL_V4: &str = "https://api.ssllabs.com/api/v4/";

/// Timeout for short-lived per-call connections. Not applied when the
/// caller supplies its own `reqwest::Client`.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues HTTP requests against the SSL Labs API and maps transport
/// failures onto the crate's error taxonomy.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    base_url: Option<Url>,
    client: Option<reqwest::Client>,
}

impl ApiClient {
    /// An adapter talking to the production v3 API. With `Some(client)` all
    /// requests share that connection, otherwise each call opens and closes
    /// a connection of its own.
    pub fn new(client: Option<reqwest::Client>) -> Self {
        Self {
            base_url: None,
            client,
        }
    }

    /// An adapter talking to `base_url` instead of the production API.
    pub fn with_base_url(client: Option<reqwest::Client>, base_url: Url) -> Self {
        Self {
            base_url: Some(base_url),
            client,
        }
    }

    fn url(&self, api_endpoint: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{base}{api_endpoint}"),
            None => format!("{SSLLABS_URL}{api_endpoint}"),
        }
    }

    fn per_call_client() -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?)
    }

    /// Performs one GET against `api_endpoint` with `params` as query
    /// string. Pairs for absent optional values must not be in `params`;
    /// an empty slice produces a URL without a query string.
    pub async fn call(&self, api_endpoint: &str, params: &[(&str, String)]) -> Result<Response> {
        let request = match &self.client {
            Some(client) => client.get(self.url(api_endpoint)).query(params),
            None => Self::per_call_client()?
                .get(self.url(api_endpoint))
                .query(params),
        };
        let response = request.send().await.map_err(classify_request_error)?;
        classify_status(response.status())?;
        Ok(response)
    }

    /// Performs one POST with a JSON body. Used by the v4 `register`
    /// operation; shares the GET failure mapping.
    pub async fn post(&self, api_endpoint: &str, body: &serde_json::Value) -> Result<Response> {
        let request = match &self.client {
            Some(client) => client.post(self.url(api_endpoint)).json(body),
            None => Self::per_call_client()?.post(self.url(api_endpoint)).json(body),
        };
        let response = request.send().await.map_err(classify_request_error)?;
        classify_status(response.status())?;
        Ok(response)
    }
}

/// Connect failures and timeouts mean the service is unreachable; anything
/// else at this stage is a plain transport problem.
fn classify_request_error(err: reqwest::Error) -> Error {
    if err.is_connect() || err.is_timeout() {
        Error::ServiceUnavailable { source: Some(err) }
    } else {
        Error::Transport(err)
    }
}

/// Maps an HTTP status onto the error taxonomy: 500/503 mean unavailable,
/// 429/529 mean overloaded, any other non-2xx is a generic status error.
fn classify_status(status: StatusCode) -> Result<()> {
    match status.as_u16() {
        500 | 503 => Err(Error::ServiceUnavailable { source: None }),
        429 | 529 => Err(Error::ServiceOverloaded),
        _ if !status.is_success() => Err(Error::HttpStatus(status)),
        _ => Ok(()),
    }
}

/// Warns about query parameters the SSL Labs API does not know. Purely
/// advisory, the parameters are still sent.
pub(crate) fn verify_params(caller: &str, given: &[(&str, String)], known: &[&str]) {
    for key in unknown_keys(given, known) {
        warn!(
            caller,
            parameter = key,
            "Parameter is not known by the SSL Labs API. It will be sent, but the results might be unexpected."
        );
    }
}

fn unknown_keys<'a>(given: &'a [(&'a str, String)], known: &[&str]) -> Vec<&'a str> {
    given
        .iter()
        .map(|(key, _)| *key)
        .filter(|key| !known.contains(key))
        .collect()
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[allow(dead_code)]
    field: Option<String>,
    message: String,
}

/// Extracts the first message from an error envelope payload
/// (`{"errors":[{"field":...,"message":...}]}`), if the body is one.
pub(crate) fn envelope_message(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    envelope.errors.into_iter().next().map(|entry| entry.message)
}
