// src/api/info.rs

use reqwest::Client;
use url::Url;

use crate::api::ApiClient;
use crate::data::InfoData;
use crate::error::Result;

/// General information about the SSL Labs API: engine and criteria
/// versions, current load and capacity limits.
#[derive(Debug, Clone)]
pub struct Info {
    api: ApiClient,
}

impl Info {
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

    pub async fn get(&self) -> Result<InfoData> {
        let response = self.api.call("info", &[]).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
