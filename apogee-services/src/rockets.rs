//! Rocket endpoints.

use std::sync::Arc;

use apogee_client::ApiClient;
use apogee_core::{ApiQuery, Paginated, Rocket};
use tracing::instrument;

use crate::error::ServiceError;

const SERVICE: &str = "RocketService";

/// Typed access to the `/rockets` endpoints.
#[derive(Debug, Clone)]
pub struct RocketService {
    client: Arc<ApiClient>,
}

impl RocketService {
    /// Creates a service over the given client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches all rockets.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<Rocket>, ServiceError> {
        let endpoint = "/rockets";
        self.client
            .get(endpoint)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "fetch all rockets", endpoint, e))
    }

    /// Fetches a single rocket by ID.
    #[instrument(skip(self))]
    pub async fn by_id(&self, id: &str) -> Result<Rocket, ServiceError> {
        let endpoint = format!("/rockets/{id}");
        self.client
            .get(&endpoint)
            .await
            .map_err(|e| ServiceError::report(SERVICE, format!("fetch rocket id={id}"), endpoint, e))
    }

    /// Queries rockets with filters, sorting, and pagination.
    #[instrument(skip(self, query))]
    pub async fn query(&self, query: &ApiQuery) -> Result<Paginated<Rocket>, ServiceError> {
        let endpoint = "/rockets/query";
        self.client
            .post(endpoint, query)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "query rockets", endpoint, e))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use apogee_client::ErrorKind;
    use serde_json::json;

    use super::*;
    use crate::test_support::{client, ok, status};

    #[tokio::test]
    async fn test_query_decodes_pagination_envelope() {
        let service = RocketService::new(client(vec![ok(json!({
            "docs": [],
            "totalDocs": 4,
            "limit": 2,
            "totalPages": 2,
            "page": 2,
            "pagingCounter": 3,
            "hasPrevPage": true,
            "hasNextPage": false,
            "prevPage": 1,
            "nextPage": null
        }))]));

        let page = service.query(&ApiQuery::default()).await.unwrap();
        assert_eq!(page.total_docs, 4);
        assert_eq!(page.prev_page, Some(1));
        assert!(page.docs.is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_wrapped_with_endpoint() {
        let service = RocketService::new(client(vec![status(404)]));

        let error = service.by_id("falcon99").await.unwrap_err();
        assert_eq!(error.service, "RocketService");
        assert_eq!(error.endpoint, "/rockets/falcon99");
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), "Resource not found.");
    }
}
