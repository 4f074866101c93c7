// src/data/http_transaction.rs

use serde::{Deserialize, Serialize};

/// One HTTP transaction issued during the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpTransactionData {
    pub request_url: String,

    pub status_code: Option<i64>,

    /// The entire request line as a single field.
    pub request_line: Option<String>,

    /// Request headers, each with name and value.
    pub request_headers: Vec<String>,

    /// The entire response line as a single field.
    pub response_line: Option<String>,

    /// All response headers as a single field, useful when malformed.
    pub response_headers_raw: Vec<String>,

    /// Response headers as name-value pairs.
    pub response_headers: Vec<serde_json::Value>,

    /// True if the server crashes when inspected, in which case the full
    /// test is refused.
    pub fragile_server: bool,
}
