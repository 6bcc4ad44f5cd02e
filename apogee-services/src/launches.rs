//! Launch endpoints.

use std::sync::Arc;

use apogee_client::ApiClient;
use apogee_core::{ApiQuery, Launch, Paginated};
use tracing::instrument;

use crate::error::ServiceError;

const SERVICE: &str = "LaunchService";

/// Typed access to the `/launches` endpoints.
#[derive(Debug, Clone)]
pub struct LaunchService {
    client: Arc<ApiClient>,
}

impl LaunchService {
    /// Creates a service over the given client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches all launches.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<Launch>, ServiceError> {
        let endpoint = "/launches";
        self.client
            .get(endpoint)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "fetch all launches", endpoint, e))
    }

    /// Fetches the latest launch.
    #[instrument(skip(self))]
    pub async fn latest(&self) -> Result<Launch, ServiceError> {
        let endpoint = "/launches/latest";
        self.client
            .get(endpoint)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "fetch latest launch", endpoint, e))
    }

    /// Fetches the next scheduled launch.
    #[instrument(skip(self))]
    pub async fn next(&self) -> Result<Launch, ServiceError> {
        let endpoint = "/launches/next";
        self.client
            .get(endpoint)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "fetch next launch", endpoint, e))
    }

    /// Fetches a launch by ID.
    #[instrument(skip(self))]
    pub async fn by_id(&self, id: &str) -> Result<Launch, ServiceError> {
        let endpoint = format!("/launches/{id}");
        self.client
            .get(&endpoint)
            .await
            .map_err(|e| {
                ServiceError::report(SERVICE, format!("fetch launch with id={id}"), endpoint, e)
            })
    }

    /// Fetches past launches.
    #[instrument(skip(self))]
    pub async fn past(&self) -> Result<Vec<Launch>, ServiceError> {
        let endpoint = "/launches/past";
        self.client
            .get(endpoint)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "fetch past launches", endpoint, e))
    }

    /// Fetches upcoming launches.
    ///
    /// Entries without a small mission patch image are dropped; the
    /// listing UI has nothing to show for them.
    #[instrument(skip(self))]
    pub async fn upcoming(&self) -> Result<Vec<Launch>, ServiceError> {
        let endpoint = "/launches/upcoming";
        let launches: Vec<Launch> = self
            .client
            .get(endpoint)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "fetch upcoming launches", endpoint, e))?;

        Ok(launches
            .into_iter()
            .filter(|launch| launch.links.patch.small.is_some())
            .collect())
    }

    /// Queries launches with filters, sorting, and pagination.
    #[instrument(skip(self, query))]
    pub async fn query(&self, query: &ApiQuery) -> Result<Paginated<Launch>, ServiceError> {
        let endpoint = "/launches/query";
        self.client
            .post(endpoint, query)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "query launches", endpoint, e))
    }
}

// ============================================================================
// Tests
// ============================================================================
