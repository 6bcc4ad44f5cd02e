//! Launch records.
//!
//! Shapes follow the `/launches` endpoint documentation:
//! <https://github.com/r-spacex/SpaceX-API/blob/master/docs/launches/v4/all.md>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Launch
// ============================================================================

/// A single launch, past or upcoming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Unique launch ID.
    pub id: String,
    /// Mission name (e.g. "FalconSat").
    pub name: String,
    /// Sequential flight number.
    pub flight_number: u32,
    /// Launch time, UTC.
    pub date_utc: DateTime<Utc>,
    /// Launch time as a Unix timestamp.
    pub date_unix: i64,
    /// Launch time in the launch site's local zone (kept verbatim, the
    /// API emits a fixed offset the chrono Utc type would discard).
    pub date_local: String,
    /// Precision of the published date.
    pub date_precision: DatePrecision,
    /// Whether the launch is still in the future.
    pub upcoming: bool,
    /// Static fire test time, UTC, if performed.
    pub static_fire_date_utc: Option<DateTime<Utc>>,
    /// Static fire test time as a Unix timestamp.
    pub static_fire_date_unix: Option<i64>,
    /// Whether the date is "no earlier than".
    pub net: bool,
    /// Launch window length in seconds, if published.
    pub window: Option<u64>,
    /// Rocket ID.
    pub rocket: String,
    /// Launchpad ID.
    pub launchpad: String,
    /// Payload IDs.
    pub payloads: Vec<String>,
    /// Capsule IDs.
    pub capsules: Vec<String>,
    /// Support ship IDs.
    pub ships: Vec<String>,
    /// Crew member IDs.
    pub crew: Vec<String>,
    /// Related links (patches, webcast, articles).
    pub links: LaunchLinks,
    /// Fairing recovery details, if applicable.
    pub fairings: Option<Fairings>,
    /// Cores flown on this launch.
    pub cores: Vec<LaunchCore>,
    /// Mission outcome; `None` while upcoming.
    pub success: Option<bool>,
    /// Failure events, if any.
    pub failures: Vec<Failure>,
    /// Free-text mission details.
    pub details: Option<String>,
    /// Whether SpaceX auto-updates this record.
    pub auto_update: bool,
    /// Whether the date is still to be determined.
    pub tbd: bool,
    /// Launch Library 2 ID, if known.
    pub launch_library_id: Option<String>,
}

/// Precision of a published launch date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    /// Known to the half-year.
    Half,
    /// Known to the quarter.
    Quarter,
    /// Known to the year.
    Year,
    /// Known to the month.
    Month,
    /// Known to the day.
    Day,
    /// Known to the hour.
    Hour,
}

// ============================================================================
// Links
// ============================================================================

/// Links related to a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchLinks {
    /// Mission patch images.
    pub patch: Patch,
    /// Reddit discussion threads.
    pub reddit: RedditLinks,
    /// Flickr photo sets.
    pub flickr: FlickrLinks,
    /// Press kit URL.
    pub presskit: Option<String>,
    /// Webcast URL.
    pub webcast: Option<String>,
    /// YouTube video ID.
    pub youtube_id: Option<String>,
    /// News article URL.
    pub article: Option<String>,
    /// Wikipedia page URL.
    pub wikipedia: Option<String>,
}

/// Mission patch images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    /// Small patch image URL.
    pub small: Option<String>,
    /// Large patch image URL.
    pub large: Option<String>,
}

/// Reddit discussion threads for a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditLinks {
    /// Campaign thread URL.
    pub campaign: Option<String>,
    /// Launch thread URL.
    pub launch: Option<String>,
    /// Media thread URL.
    pub media: Option<String>,
    /// Recovery thread URL.
    pub recovery: Option<String>,
}

/// Flickr photo sets for a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlickrLinks {
    /// Small image URLs.
    pub small: Vec<String>,
    /// Original-resolution image URLs.
    pub original: Vec<String>,
}

// ============================================================================
// Hardware
// ============================================================================

/// Fairing recovery details for a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fairings {
    /// Whether the fairings were reused.
    pub reused: Option<bool>,
    /// Whether a recovery was attempted.
    pub recovery_attempt: Option<bool>,
    /// Whether the fairings were recovered.
    pub recovered: Option<bool>,
    /// Recovery ship IDs.
    pub ships: Vec<String>,
}

/// A core flown on a launch, with its landing outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchCore {
    /// Core ID, if assigned.
    pub core: Option<String>,
    /// Flight number of this core.
    pub flight: Option<u32>,
    /// Whether grid fins were fitted.
    pub gridfins: Option<bool>,
    /// Whether landing legs were fitted.
    pub legs: Option<bool>,
    /// Whether the core was reused.
    pub reused: Option<bool>,
    /// Whether a landing was attempted.
    pub landing_attempt: Option<bool>,
    /// Whether the landing succeeded.
    pub landing_success: Option<bool>,
    /// Landing type (e.g. "ASDS", "RTLS").
    pub landing_type: Option<String>,
    /// Landing pad ID.
    pub landpad: Option<String>,
}

/// A failure event during a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// Seconds after liftoff.
    pub time: i64,
    /// Altitude in kilometers, if applicable.
    pub altitude: Option<f64>,
    /// Failure reason.
    pub reason: String,
}
