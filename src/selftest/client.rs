//! Typed HTTP client for the catalog routes.

use reqwest::Client;

use crate::catalog::{LaserDisc, NewLaserDisc};
use crate::http::MessageBody;

/// Thin wrapper over `reqwest` that speaks the `/ld` routes.
///
/// Every call fails with a `reqwest::Error` on connection problems, non-2xx
/// statuses and undecodable bodies.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, pooling).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /ld`
    pub async fn list(&self) -> Result<Vec<LaserDisc>, reqwest::Error> {
        self.client
            .get(format!("{}/ld", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// `GET /ld/{id}`
    pub async fn get(&self, id: u64) -> Result<LaserDisc, reqwest::Error> {
        self.client
            .get(format!("{}/ld/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// `POST /ld`
    pub async fn create(&self, disc: &NewLaserDisc) -> Result<LaserDisc, reqwest::Error> {
        self.client
            .post(format!("{}/ld", self.base_url))
            .json(disc)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// `DELETE /ld/{id}`
    pub async fn delete(&self, id: u64) -> Result<MessageBody, reqwest::Error> {
        self.client
            .delete(format!("{}/ld/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
