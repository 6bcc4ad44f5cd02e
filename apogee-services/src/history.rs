//! History endpoints.

use std::sync::Arc;

use apogee_client::ApiClient;
use apogee_core::{ApiQuery, HistoryEvent, Paginated};
use tracing::instrument;

use crate::error::ServiceError;

const SERVICE: &str = "HistoryService";

/// Typed access to the `/history` endpoints.
#[derive(Debug, Clone)]
pub struct HistoryService {
    client: Arc<ApiClient>,
}

impl HistoryService {
    /// Creates a service over the given client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches all historical events.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<HistoryEvent>, ServiceError> {
        let endpoint = "/history";
        self.client
            .get(endpoint)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "fetch history", endpoint, e))
    }

    /// Fetches a single historical event by ID.
    #[instrument(skip(self))]
    pub async fn by_id(&self, id: &str) -> Result<HistoryEvent, ServiceError> {
        let endpoint = format!("/history/{id}");
        self.client.get(&endpoint).await.map_err(|e| {
            ServiceError::report(SERVICE, format!("fetch history event id={id}"), endpoint, e)
        })
    }

    /// Queries historical events with filters, sorting, and pagination.
    #[instrument(skip(self, query))]
    pub async fn query(&self, query: &ApiQuery) -> Result<Paginated<HistoryEvent>, ServiceError> {
        let endpoint = "/history/query";
        self.client
            .post(endpoint, query)
            .await
            .map_err(|e| ServiceError::report(SERVICE, "query history", endpoint, e))
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

    fn event_json(id: &str, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "details": "A milestone.",
            "event_date_utc": "2008-09-28T23:15:00Z",
            "event_date_unix": 1_222_643_700,
            "links": { "article": null }
        })
    }

    #[tokio::test]
    async fn test_all_decodes_events() {
        let body = json!([event_json("a", "First orbit"), event_json("b", "First reflight")]);
        let service = HistoryService::new(client(vec![ok(body)]));

        let events = service.all().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "First orbit");
    }

    #[tokio::test]
    async fn test_by_id_not_found() {
        let service = HistoryService::new(client(vec![status(404)]));

        let error = service.by_id("missing").await.unwrap_err();
        assert_eq!(error.service, "HistoryService");
        assert_eq!(error.endpoint, "/history/missing");
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_query_posts_body() {
        let service = HistoryService::new(client(vec![ok(json!({
            "docs": [event_json("a", "First orbit")],
            "totalDocs": 1,
            "limit": 10,
            "totalPages": 1,
            "page": 1,
            "pagingCounter": 1,
            "hasPrevPage": false,
            "hasNextPage": false,
            "prevPage": null,
            "nextPage": null
        }))]));

        let query = ApiQuery::filter(json!({ "title": "orbit" }));
        let page = service.query(&query).await.unwrap();
        assert_eq!(page.docs.len(), 1);
        assert_eq!(page.total_docs, 1);
    }
}
