// src/api/status_codes.rs

use reqwest::Client;
use url::Url;

use crate::api::ApiClient;
use crate::data::StatusCodesData;
use crate::error::Result;

/// Retrieves the catalog of known assessment status detail codes.
#[derive(Debug, Clone)]
pub struct StatusCodes {
    api: ApiClient,
}

impl StatusCodes {
    pub fn new(client: Option<Client>) -> Self {
        Self {
            api: ApiClient::new(client),
        }
    }

    pub fn with_base_url(client: Option<Client>, base_url: Url) -> Self {
        Self {
            api: ApiClient::with_base_url(client, base_url),
        }
    }

    pub async fn get(&self) -> Result<StatusCodesData> {
        let response = self.api.call("getStatusCodes", &[]).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
