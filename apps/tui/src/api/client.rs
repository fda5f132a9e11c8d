use crate::api::models::{
    PotentialResponse, RealizationResponse, SppgListResponse, TargetResponse,
};
use crate::config::Endpoints;
use serde::de::DeserializeOwned;
use tracing::info;

/// Failures at the network boundary. A non-success status is its own
/// variant because a phase must fail atomically on it even though the
/// transport call succeeded.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
}

/// Read-only client for the upstream endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints,
        }
    }

    /// The underlying HTTP client, shared with the assistant call.
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub async fn fetch_sppg_units(&self) -> Result<SppgListResponse, ApiError> {
        self.get("sppg-units", &self.endpoints.sppg_units).await
    }

    pub async fn fetch_potential(&self) -> Result<PotentialResponse, ApiError> {
        self.get("potential", &self.endpoints.potential).await
    }

    pub async fn fetch_realizations(&self) -> Result<RealizationResponse, ApiError> {
        self.get("realizations", &self.endpoints.realizations).await
    }

    pub async fn fetch_targets(&self) -> Result<TargetResponse, ApiError> {
        self.get("targets", &self.endpoints.targets).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        info!(endpoint, status = %status, "got upstream response");

        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        Ok(response.json::<T>().await?)
    }
}
