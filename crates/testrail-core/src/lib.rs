//! Typed records for the TestRail API.
//!
//! This crate maps TestRail response bodies onto typed records and builds
//! sparse request payloads from them. It does not talk to the network: an
//! API client hands response JSON to [`Record::parse`] and sends the value
//! returned by [`Record::to_json`] as a request body.
//!
//! # Mapping rules
//!
//! - Required fields that are absent, null or wrong-typed fail the whole
//!   parse with a [`ParseError`] naming the field path.
//! - Optional fields that are absent or null become `None`.
//! - Dates travel as epoch seconds and decode to UTC [`jiff::Timestamp`]s.
//! - Nested collections keep wire order; an absent collection is `None`,
//!   not an empty vec.
//! - `to_json` emits only user-settable fields that are set: non-blank
//!   strings, `Some` references, non-empty collections.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use testrail_core::{Plan, PlanEntry, Record};
//!
//! let request = Plan {
//!     name: "Sprint 12 regression".to_string(),
//!     entries: Some(vec![PlanEntry {
//!         suite_id: Some(4),
//!         include_all: Some(true),
//!         ..Default::default()
//!     }]),
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     request.to_json(),
//!     json!({
//!         "name": "Sprint 12 regression",
//!         "entries": [{"suite_id": 4, "include_all": true}]
//!     })
//! );
//! ```

pub mod display;
pub mod error;
pub mod json;
pub mod models;

// Re-export commonly used types
pub use display::UtcDateTime;
pub use error::{ParseError, Result};
pub use models::{parse_list, Plan, PlanEntry, RawJson, Record, Run, StatusCounts};
