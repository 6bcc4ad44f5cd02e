//! Historical events.
//!
//! Shapes follow the `/history` endpoint documentation:
//! <https://github.com/r-spacex/SpaceX-API/blob/master/docs/history/v4/all.md>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A SpaceX historical milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEvent {
    /// Unique event ID.
    pub id: String,
    /// Event title (e.g. "Falcon reaches Earth orbit").
    pub title: String,
    /// Event description.
    pub details: String,
    /// Event time, UTC.
    pub event_date_utc: DateTime<Utc>,
    /// Event time as a Unix timestamp.
    pub event_date_unix: i64,
    /// Related links.
    pub links: HistoryLinks,
}

/// Links related to a historical event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLinks {
    /// Related article URL, if any.
    pub article: Option<String>,
}
