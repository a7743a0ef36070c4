//! API client for the apartments REST collaborator.

use crate::config::TuiConfig;
use flathunt_core::{Apartment, ApartmentId, ApartmentQuery, CreateApartmentRequest};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Shared handle for the three apartments operations.
///
/// Stateless and cheap to clone; built once in `main` from the config and
/// handed to every spawned fetch task.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /apartments` with only the constrained filter fields as query
    /// parameters. Unconstrained fields are not sent at all.
    pub async fn list_apartments(
        &self,
        query: &ApartmentQuery,
    ) -> Result<Vec<Apartment>, ApiClientError> {
        let url = format!("{}/apartments", self.base_url);
        let response = self.client.get(url).query(query).send().await?;
        self.parse_response(response).await
    }

    /// `GET /apartments/{id}`.
    pub async fn get_apartment(&self, id: ApartmentId) -> Result<Apartment, ApiClientError> {
        let url = format!("{}/apartments/{}", self.base_url, id);
        let response = self.client.get(url).send().await?;
        self.parse_response(response).await
    }

    /// `POST /apartments`.
    pub async fn create_apartment(
        &self,
        request: &CreateApartmentRequest,
    ) -> Result<Apartment, ApiClientError> {
        let url = format!("{}/apartments", self.base_url);
        let response = self.client.post(url).json(request).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await?;
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }
}
