// src/api/register.rs

use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::api::{envelope_message, ApiClient, SSLLABS_URL_V4};
use crate::data::RegisterData;
use crate::error::{Error, Result};

/// Registers an e-mail address with the v4 API.
///
/// The v4 API requires registration before issuing assessments. It reports
/// problems (an already registered e-mail, for example) through the same
/// error envelope as the endpoint API.
#[derive(Debug, Clone)]
pub struct Register {
    api: ApiClient,
}

impl Register {
    pub fn new(client: Option<Client>) -> Self {
        // The register operation only exists on the v4 API.
        let base_url = Url::parse(SSLLABS_URL_V4).expect("static URL is valid");
        Self {
            api: ApiClient::with_base_url(client, base_url),
        }
    }

    pub fn with_base_url(client: Option<Client>, base_url: Url) -> Self {
        Self {
            api: ApiClient::with_base_url(client, base_url),
        }
    }

    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        organization: &str,
    ) -> Result<RegisterData> {
        let body = json!({
            "firstName": first_name,
            "lastName": last_name,
            "email": email,
            "organization": organization,
        });
        let response = self.api.post("register", &body).await?;
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(data) => Ok(data),
            Err(err) => match envelope_message(&body) {
                Some(message) => Err(Error::Endpoint(message)),
                None => Err(Error::MalformedResponse(err)),
            },
        }
    }
}
