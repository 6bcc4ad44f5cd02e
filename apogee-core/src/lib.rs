// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Apogee Core
//!
//! Data models for the SpaceX REST API (v4).
//!
//! This crate contains the typed representations of the API's documented
//! response shapes, plus the Mongo-style query and pagination envelope used
//! by the `/query` endpoints. All types are plain serde-derived data; the
//! request machinery lives in `apogee-client`.
//!
//! ## Key Types
//!
//! ### Resources
//! - [`Rocket`] - Rocket specifications (stages, engines, dimensions)
//! - [`Launch`] - Launch records (dates, cores, links, outcome)
//! - [`HistoryEvent`] - Historical milestones
//!
//! ### Querying
//! - [`ApiQuery`] - Mongo-style filter with sort/pagination options
//! - [`Paginated`] - The API's pagination envelope for query responses

pub mod models;

// Re-export all model types
pub use models::{
    // Rocket types
    CompositeFairing,
    Dimension,
    Engines,
    FirstStage,
    Isp,
    LandingLegs,
    Mass,
    PayloadOptions,
    PayloadWeight,
    Rocket,
    SecondStage,
    Thrust,
    // Launch types
    DatePrecision,
    Failure,
    Fairings,
    FlickrLinks,
    Launch,
    LaunchCore,
    LaunchLinks,
    Patch,
    RedditLinks,
    // History types
    HistoryEvent,
    HistoryLinks,
    // Query types
    ApiQuery,
    Paginated,
    QueryOptions,
    SortOrder,
};
