//! Serde tests for the API models.
//!
//! These tests deserialize representative wire-format JSON (taken from the
//! documented v4 response shapes) and verify the round-trip preserves data.

use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::{
    ApiQuery, DatePrecision, HistoryEvent, Launch, Paginated, QueryOptions, Rocket, SortOrder,
};

// ============================================================================
// Rocket
// ============================================================================

fn rocket_fixture() -> serde_json::Value {
    json!({
        "id": "5e9d0d95eda69955f709d1eb",
        "name": "Falcon 1",
        "type": "rocket",
        "active": false,
        "stages": 2,
        "boosters": 0,
        "cost_per_launch": 6_700_000,
        "success_rate_pct": 40.0,
        "first_flight": "2006-03-24",
        "country": "Republic of the Marshall Islands",
        "company": "SpaceX",
        "wikipedia": "https://en.wikipedia.org/wiki/Falcon_1",
        "description": "The Falcon 1 was an expendable launch system.",
        "flickr_images": ["https://imgur.com/DaCfMsj.jpg"],
        "height": { "meters": 22.25, "feet": 73.0 },
        "diameter": { "meters": 1.68, "feet": 5.5 },
        "mass": { "kg": 30146.0, "lb": 66460.0 },
        "first_stage": {
            "thrust_sea_level": { "kN": 420.0, "lbf": 94000.0 },
            "thrust_vacuum": { "kN": 480.0, "lbf": 110_000.0 },
            "reusable": false,
            "engines": 1,
            "fuel_amount_tons": 44.3,
            "burn_time_sec": 169
        },
        "second_stage": {
            "thrust": { "kN": 31.0, "lbf": 7000.0 },
            "payloads": {
                "composite_fairing": {
                    "height": { "meters": 3.5, "feet": 11.5 },
                    "diameter": { "meters": 1.5, "feet": 4.9 }
                },
                "option_1": "composite fairing"
            },
            "reusable": false,
            "engines": 1,
            "fuel_amount_tons": 3.38,
            "burn_time_sec": 378
        },
        "engines": {
            "isp": { "sea_level": 267.0, "vacuum": 304.0 },
            "thrust_sea_level": { "kN": 420.0, "lbf": 94000.0 },
            "thrust_vacuum": { "kN": 480.0, "lbf": 110_000.0 },
            "number": 1,
            "type": "merlin",
            "version": "1C",
            "layout": "single",
            "engine_loss_max": 0,
            "propellant_1": "liquid oxygen",
            "propellant_2": "RP-1 kerosene",
            "thrust_to_weight": 96.0
        },
        "landing_legs": { "number": 0, "material": null },
        "payload_weights": [
            { "id": "leo", "name": "Low Earth Orbit", "kg": 450.0, "lb": 992.0 }
        ]
    })
}

#[test]
fn test_rocket_deserialize() {
    let rocket: Rocket = serde_json::from_value(rocket_fixture()).unwrap();

    assert_eq!(rocket.name, "Falcon 1");
    assert_eq!(rocket.kind, "rocket");
    assert!(!rocket.active);
    assert_eq!(rocket.engines.kind, "merlin");
    assert_eq!(rocket.engines.thrust_sea_level.kn, 420.0);
    assert_eq!(rocket.landing_legs.material, None);
    assert_eq!(rocket.payload_weights[0].id, "leo");
}

#[test]
fn test_rocket_roundtrip() {
    let rocket: Rocket = serde_json::from_value(rocket_fixture()).unwrap();
    let json = serde_json::to_value(&rocket).unwrap();
    let back: Rocket = serde_json::from_value(json).unwrap();
    assert_eq!(rocket, back);
}

#[test]
fn test_rocket_renamed_fields_serialize_as_wire_names() {
    let rocket: Rocket = serde_json::from_value(rocket_fixture()).unwrap();
    let json = serde_json::to_value(&rocket).unwrap();

    // `kind` and `kn` are Rust-side names only
    assert_eq!(json["type"], "rocket");
    assert_eq!(json["engines"]["type"], "merlin");
    assert!(json["engines"]["thrust_vacuum"].get("kN").is_some());
    assert!(json.get("kind").is_none());
}

// ============================================================================
// Launch
// ============================================================================

fn launch_fixture() -> serde_json::Value {
    json!({
        "id": "5eb87cd9ffd86e000604b32a",
        "name": "FalconSat",
        "flight_number": 1,
        "date_utc": "2006-03-24T22:30:00.000Z",
        "date_unix": 1_143_239_400,
        "date_local": "2006-03-25T10:30:00+12:00",
        "date_precision": "hour",
        "upcoming": false,
        "static_fire_date_utc": "2006-03-17T00:00:00.000Z",
        "static_fire_date_unix": 1_142_553_600,
        "net": false,
        "window": 0,
        "rocket": "5e9d0d95eda69955f709d1eb",
        "launchpad": "5e9e4502f5090995de566f86",
        "payloads": ["5eb0e4b5b6c3bb0006eeb1e1"],
        "capsules": [],
        "ships": [],
        "crew": [],
        "links": {
            "patch": {
                "small": "https://images2.imgbox.com/94/f2/NN6Ph45r_o.png",
                "large": "https://images2.imgbox.com/5b/02/QcxHUb5V_o.png"
            },
            "reddit": {
                "campaign": null,
                "launch": null,
                "media": null,
                "recovery": null
            },
            "flickr": { "small": [], "original": [] },
            "presskit": null,
            "webcast": "https://www.youtube.com/watch?v=0a_00nJ_Y88",
            "youtube_id": "0a_00nJ_Y88",
            "article": "https://www.space.com/2196-spacex-inaugural-falcon-1-rocket-lost-launch.html",
            "wikipedia": "https://en.wikipedia.org/wiki/DemoSat"
        },
        "fairings": {
            "reused": false,
            "recovery_attempt": false,
            "recovered": false,
            "ships": []
        },
        "cores": [{
            "core": "5e9e289df35918033d3b2623",
            "flight": 1,
            "gridfins": false,
            "legs": false,
            "reused": false,
            "landing_attempt": false,
            "landing_success": null,
            "landing_type": null,
            "landpad": null
        }],
        "success": false,
        "failures": [{ "time": 33, "altitude": null, "reason": "merlin engine failure" }],
        "details": "Engine failure at 33 seconds and loss of vehicle",
        "auto_update": true,
        "tbd": false,
        "launch_library_id": null
    })
}

#[test]
fn test_launch_deserialize() {
    let launch: Launch = serde_json::from_value(launch_fixture()).unwrap();

    assert_eq!(launch.name, "FalconSat");
    assert_eq!(launch.date_precision, DatePrecision::Hour);
    assert_eq!(
        launch.date_utc,
        Utc.with_ymd_and_hms(2006, 3, 24, 22, 30, 0).unwrap()
    );
    assert_eq!(launch.success, Some(false));
    assert_eq!(launch.failures[0].time, 33);
    assert_eq!(launch.cores[0].landing_success, None);
    assert!(launch.links.patch.small.is_some());
}

#[test]
fn test_launch_roundtrip() {
    let launch: Launch = serde_json::from_value(launch_fixture()).unwrap();
    let json = serde_json::to_value(&launch).unwrap();
    let back: Launch = serde_json::from_value(json).unwrap();
    assert_eq!(launch, back);
}

#[test]
fn test_date_precision_lowercase() {
    let precision: DatePrecision = serde_json::from_str(r#""quarter""#).unwrap();
    assert_eq!(precision, DatePrecision::Quarter);

    let invalid: Result<DatePrecision, _> = serde_json::from_str(r#""Quarter""#);
    assert!(invalid.is_err());
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_event_deserialize() {
    let event: HistoryEvent = serde_json::from_value(json!({
        "id": "5f6fb2cab3467846b324215f",
        "title": "Falcon reaches Earth orbit",
        "details": "Falcon 1 becomes the first privately developed liquid-fuel rocket to reach Earth orbit.",
        "event_date_utc": "2008-09-28T23:15:00Z",
        "event_date_unix": 1_222_643_700,
        "links": { "article": "http://www.spacex.com/news/2013/02/11/flight-4-launch-update-0" }
    }))
    .unwrap();

    assert_eq!(event.title, "Falcon reaches Earth orbit");
    assert_eq!(event.event_date_unix, 1_222_643_700);
    assert!(event.links.article.is_some());
}

// ============================================================================
// Query & Pagination
// ============================================================================

#[test]
fn test_api_query_serializes_sparse() {
    let query = ApiQuery::filter(json!({ "upcoming": true }))
        .with_options(QueryOptions::default().with_limit(5).sort_by("date_utc", SortOrder::Desc));

    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(json["query"]["upcoming"], true);
    assert_eq!(json["options"]["limit"], 5);
    assert_eq!(json["options"]["sort"]["date_utc"], "desc");
    // Unset fields are omitted entirely
    assert!(json["options"].get("page").is_none());
    assert!(json["options"].get("select").is_none());
}

#[test]
fn test_empty_query_serializes_empty_object() {
    let json = serde_json::to_value(ApiQuery::default()).unwrap();
    assert_eq!(json, json!({}));
}

#[test]
fn test_paginated_envelope_deserialize() {
    let page: Paginated<HistoryEvent> = serde_json::from_value(json!({
        "docs": [],
        "totalDocs": 20,
        "limit": 10,
        "totalPages": 2,
        "page": 1,
        "pagingCounter": 1,
        "hasPrevPage": false,
        "hasNextPage": true,
        "prevPage": null,
        "nextPage": 2
    }))
    .unwrap();

    assert_eq!(page.total_docs, 20);
    assert!(page.has_next_page);
    assert_eq!(page.prev_page, None);
    assert_eq!(page.next_page, Some(2));
}
