//! Query requests and the pagination envelope.
//!
//! The API's `/query` endpoints accept a Mongo-style body and respond with
//! a mongoose-paginate envelope. Reference:
//! <https://github.com/r-spacex/SpaceX-API/blob/master/docs/queries.md>

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Query Request
// ============================================================================

/// A Mongo-style query request for the `/query` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiQuery {
    /// Mongo-style filter object (e.g. `{"active": true}`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<serde_json::Value>,
    /// Pagination and projection options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<QueryOptions>,
}

impl ApiQuery {
    /// Creates a query with only a filter.
    pub fn filter(filter: serde_json::Value) -> Self {
        Self {
            query: Some(filter),
            options: None,
        }
    }

    /// Sets the query options.
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Pagination, sorting, and projection options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Maximum number of documents per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page number (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Sort order per field (e.g. `{"flight_number": "asc"}`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub sort: BTreeMap<String, SortOrder>,
    /// Field names to return.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub select: Vec<String>,
}

impl QueryOptions {
    /// Sets the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Adds a sort key.
    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort.insert(field.into(), order);
        self
    }
}

/// Sort direction for a query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

// ============================================================================
// Pagination Envelope
// ============================================================================

/// Paginated response returned by the `/query` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Documents on this page.
    pub docs: Vec<T>,
    /// Total matching documents.
    pub total_docs: u64,
    /// Page size used.
    pub limit: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Current page number.
    pub page: u32,
    /// 1-based index of the first document on this page.
    pub paging_counter: u64,
    /// Whether a previous page exists.
    pub has_prev_page: bool,
    /// Whether a next page exists.
    pub has_next_page: bool,
    /// Previous page number, if any.
    pub prev_page: Option<u32>,
    /// Next page number, if any.
    pub next_page: Option<u32>,
}
