//! Data models for the SpaceX API.
//!
//! Field names follow the wire format documented at
//! <https://github.com/r-spacex/SpaceX-API/tree/master/docs>.
//!
//! ## Submodules
//!
//! - [`rocket`] - Rocket specifications
//! - [`launch`] - Launch records
//! - [`history`] - Historical events
//! - [`query`] - Query requests and pagination envelope

mod history;
mod launch;
mod query;
mod rocket;

// Re-export everything at the models level
pub use history::{HistoryEvent, HistoryLinks};
pub use launch::{
    DatePrecision, Failure, Fairings, FlickrLinks, Launch, LaunchCore, LaunchLinks, Patch,
    RedditLinks,
};
pub use query::{ApiQuery, Paginated, QueryOptions, SortOrder};
pub use rocket::{
    CompositeFairing, Dimension, Engines, FirstStage, Isp, LandingLegs, Mass, PayloadOptions,
    PayloadWeight, Rocket, SecondStage, Thrust,
};
#[cfg(test)]
mod serde_tests;
