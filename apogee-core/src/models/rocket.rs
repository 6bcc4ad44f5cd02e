//! Rocket specifications.
//!
//! Shapes follow the `/rockets` endpoint documentation:
//! <https://github.com/r-spacex/SpaceX-API/blob/master/docs/rockets/v4/all.md>

use serde::{Deserialize, Serialize};

// ============================================================================
// Rocket
// ============================================================================

/// A SpaceX rocket and its full specification sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    /// Unique rocket ID.
    pub id: String,
    /// Rocket name (e.g. "Falcon 9").
    pub name: String,
    /// Rocket type (the API reports "rocket" for all entries).
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the rocket is in active service.
    pub active: bool,
    /// Number of stages.
    pub stages: u32,
    /// Number of strap-on boosters.
    pub boosters: u32,
    /// Cost per launch in USD.
    pub cost_per_launch: u64,
    /// Launch success rate, 0-100.
    pub success_rate_pct: f64,
    /// First flight date, `YYYY-MM-DD`.
    pub first_flight: String,
    /// Country of origin.
    pub country: String,
    /// Manufacturing company.
    pub company: String,
    /// Wikipedia page URL.
    pub wikipedia: String,
    /// Free-text description.
    pub description: String,
    /// Flickr image URLs.
    pub flickr_images: Vec<String>,
    /// Overall height.
    pub height: Dimension,
    /// Body diameter.
    pub diameter: Dimension,
    /// Total mass.
    pub mass: Mass,
    /// First stage details.
    pub first_stage: FirstStage,
    /// Second stage details.
    pub second_stage: SecondStage,
    /// Engine specifications.
    pub engines: Engines,
    /// Landing leg configuration.
    pub landing_legs: LandingLegs,
    /// Payload capacity per target orbit.
    pub payload_weights: Vec<PayloadWeight>,
}

// ============================================================================
// Measurements
// ============================================================================

/// A length in meters and feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Meters, if published.
    pub meters: Option<f64>,
    /// Feet, if published.
    pub feet: Option<f64>,
}

/// A mass in kilograms and pounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    /// Kilograms.
    pub kg: f64,
    /// Pounds.
    pub lb: f64,
}

/// Thrust in kilonewtons and pounds-force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thrust {
    /// Kilonewtons.
    #[serde(rename = "kN")]
    pub kn: f64,
    /// Pounds-force.
    pub lbf: f64,
}

/// Specific impulse at sea level and in vacuum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Isp {
    /// Sea-level ISP in seconds.
    pub sea_level: f64,
    /// Vacuum ISP in seconds.
    pub vacuum: f64,
}

// ============================================================================
// Stages
// ============================================================================

/// First (booster) stage details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstStage {
    /// Thrust at sea level.
    pub thrust_sea_level: Thrust,
    /// Thrust in vacuum.
    pub thrust_vacuum: Thrust,
    /// Whether the stage is recoverable.
    pub reusable: bool,
    /// Number of engines.
    pub engines: u32,
    /// Fuel load in metric tons.
    pub fuel_amount_tons: f64,
    /// Burn time in seconds, if published.
    pub burn_time_sec: Option<u32>,
}

/// Second (upper) stage details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondStage {
    /// Engine thrust.
    pub thrust: Thrust,
    /// Payload accommodation options.
    pub payloads: PayloadOptions,
    /// Whether the stage is recoverable.
    pub reusable: bool,
    /// Number of engines.
    pub engines: u32,
    /// Fuel load in metric tons.
    pub fuel_amount_tons: f64,
    /// Burn time in seconds, if published.
    pub burn_time_sec: Option<u32>,
}

/// Payload accommodation options for the upper stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadOptions {
    /// Composite fairing dimensions.
    pub composite_fairing: CompositeFairing,
    /// Primary payload option (e.g. "composite fairing").
    pub option_1: String,
}

/// Composite fairing dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeFairing {
    /// Fairing height.
    pub height: Dimension,
    /// Fairing diameter.
    pub diameter: Dimension,
}

// ============================================================================
// Engines & Hardware
// ============================================================================

/// Engine specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engines {
    /// Specific impulse.
    pub isp: Isp,
    /// Thrust at sea level.
    pub thrust_sea_level: Thrust,
    /// Thrust in vacuum.
    pub thrust_vacuum: Thrust,
    /// Number of engines on the first stage.
    pub number: u32,
    /// Engine type (e.g. "merlin").
    #[serde(rename = "type")]
    pub kind: String,
    /// Engine version (e.g. "1D+").
    pub version: String,
    /// Engine layout (e.g. "octaweb"), if published.
    pub layout: Option<String>,
    /// Maximum engines that can fail without losing the mission.
    pub engine_loss_max: Option<u32>,
    /// Oxidizer.
    pub propellant_1: String,
    /// Fuel.
    pub propellant_2: String,
    /// Thrust-to-weight ratio.
    pub thrust_to_weight: f64,
}

/// Landing leg configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingLegs {
    /// Number of legs.
    pub number: u32,
    /// Leg material, if any.
    pub material: Option<String>,
}

/// Payload capacity to a target orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadWeight {
    /// Orbit ID (e.g. "leo", "gto").
    pub id: String,
    /// Human-readable orbit name.
    pub name: String,
    /// Capacity in kilograms.
    pub kg: f64,
    /// Capacity in pounds.
    pub lb: f64,
}
