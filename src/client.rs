// src/client.rs

use std::time::Duration;

use reqwest::Client;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::api::{Analyze, Info, RootCertsRaw, StatusCodes};
use crate::data::{HostData, InfoData, StatusCodesData};
use crate::error::{Error, Result};
use crate::trust_store::TrustStore;

/// Optional knobs of an assessment submission. Immutable once handed to
/// [`Ssllabs::analyze`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Publish the results on the public boards.
    pub publish: bool,

    /// Proceed even when the server certificate does not match the
    /// hostname.
    pub ignore_mismatch: bool,

    /// Deliver cached results instead of starting a new assessment.
    pub from_cache: bool,

    /// Maximum acceptable age of a cached report, in hours.
    pub max_age: Option<u32>,
}

/// High level entry point for the SSL Labs assessment APIs.
///
/// One instance serializes its own submissions through a single-slot gate:
/// a second `analyze` call waits for the gate instead of racing a
/// duplicate submission. The gate is released right after the submission
/// response arrives, so polling for one host does not block submitting
/// the next.
#[derive(Debug)]
pub struct Ssllabs {
    client: Option<Client>,
    base_url: Option<Url>,
    gate: Mutex<()>,
}

impl Ssllabs {
    /// A client opening and closing a connection per call.
    pub fn new() -> Self {
        Self::build(None, None)
    }

    /// A client sharing `client` across all calls. No timeout is imposed
    /// beyond what `client` is configured with.
    pub fn with_client(client: Client) -> Self {
        Self::build(Some(client), None)
    }

    /// A client talking to `base_url` instead of the production API.
    pub fn with_base_url(client: Option<Client>, base_url: Url) -> Self {
        Self::build(client, Some(base_url))
    }

    fn build(client: Option<Client>, base_url: Option<Url>) -> Self {
        info!(
            "You will be sending assessment requests to remote SSL Labs servers and information \
             will be shared with them."
        );
        info!("Please subject to the terms and conditions: https://www.ssllabs.com/about/terms.html");
        Self {
            client,
            base_url,
            gate: Mutex::new(()),
        }
    }

    /// Checks whether the SSL Labs servers are reachable.
    ///
    /// Returns `Ok(false)` only when the info call fails with
    /// [`Error::ServiceUnavailable`]; every other failure propagates.
    pub async fn availability(&self) -> Result<bool> {
        match self.info_api().get().await {
            Ok(_) => {
                info!("SSL Labs servers are up and running.");
                Ok(true)
            }
            Err(err @ Error::ServiceUnavailable { .. }) => {
                error!("{err}");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Assesses `host`, respecting the server's capacity limits and
    /// cool-off, and polls until the job reaches `READY` or `ERROR`.
    ///
    /// Capacity exhaustion is an expected condition: the capacity loop
    /// re-fetches the capability info once per second, without bound, until
    /// a slot opens up. Dropping the returned future cancels the operation
    /// at any suspension point.
    pub async fn analyze(&self, host: &str, options: AnalyzeOptions) -> Result<HostData> {
        let gate = self.gate.lock().await;
        info!(host, "Analyzing host.");
        let info_api = self.info_api();
        let mut info = info_api.get().await?;
        for message in &info.messages {
            info!("{message}");
        }

        // Wait for a free slot if all slots are in use.
        while info.current_assessments >= info.max_assessments {
            warn!(
                current = info.current_assessments,
                "Maximum number of assessments reached. Need to wait."
            );
            sleep(Duration::from_secs(1)).await;
            info = info_api.get().await?;
        }

        // An assessment is already running service-wide; honor the cool-off
        // before starting the next one.
        if info.current_assessments != 0 {
            sleep(Duration::from_millis(info.new_assessment_cool_off)).await;
        }

        let analyze_api = self.analyze_api();
        let mut host_object = analyze_api
            .get(host, &build_analyze_params(&options))
            .await?;

        // Polling happens outside the gate so another caller can submit
        // while this assessment runs.
        drop(gate);

        while !is_terminal(&host_object) {
            debug!(host, "Assessment not ready yet.");
            sleep(Duration::from_secs(10)).await;
            host_object = analyze_api
                .get(host, &[("all", String::from("done"))])
                .await?;
        }
        Ok(host_object)
    }

    /// Retrieves the engine and criteria versions and the current capacity
    /// limits.
    pub async fn info(&self) -> Result<InfoData> {
        self.info_api().get().await
    }

    /// Retrieves the root certificates of `trust_store` as raw PEM text.
    pub async fn root_certs(&self, trust_store: TrustStore) -> Result<String> {
        self.root_certs_api()
            .get(&[("trustStore", trust_store.as_param())])
            .await
    }

    /// Retrieves the catalog of known status detail codes.
    pub async fn status_codes(&self) -> Result<StatusCodesData> {
        self.status_codes_api().get().await
    }

    fn info_api(&self) -> Info {
        match &self.base_url {
            Some(base_url) => Info::with_base_url(self.client.clone(), base_url.clone()),
            None => Info::new(self.client.clone()),
        }
    }

    fn analyze_api(&self) -> Analyze {
        match &self.base_url {
            Some(base_url) => Analyze::with_base_url(self.client.clone(), base_url.clone()),
            None => Analyze::new(self.client.clone()),
        }
    }

    fn root_certs_api(&self) -> RootCertsRaw {
        match &self.base_url {
            Some(base_url) => RootCertsRaw::with_base_url(self.client.clone(), base_url.clone()),
            None => RootCertsRaw::new(self.client.clone()),
        }
    }

    fn status_codes_api(&self) -> StatusCodes {
        match &self.base_url {
            Some(base_url) => StatusCodes::with_base_url(self.client.clone(), base_url.clone()),
            None => StatusCodes::new(self.client.clone()),
        }
    }
}

impl Default for Ssllabs {
    fn default() -> Self {
        Self::new()
    }
}

/// True once a snapshot reached a status past which no further polling is
/// meaningful.
fn is_terminal(host: &HostData) -> bool {
    host.status == "READY" || host.status == "ERROR"
}

/// Query parameters of a submission. `startNew` and `fromCache` are always
/// complementary here, so the mutually exclusive combination cannot leave
/// the orchestrator.
fn build_analyze_params(options: &AnalyzeOptions) -> Vec<(&'static str, String)> {
    let on_off = |flag: bool| String::from(if flag { "on" } else { "off" });
    let mut params = vec![
        ("startNew", on_off(!options.from_cache)),
        ("fromCache", on_off(options.from_cache)),
        ("publish", on_off(options.publish)),
        ("ignoreMismatch", on_off(options.ignore_mismatch)),
    ];
    if let Some(max_age) = options.max_age {
        params.push(("maxAge", max_age.to_string()));
    }
    params
}
