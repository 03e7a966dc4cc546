//! Typed TestRail records.
//!
//! Every record implements [`Record`]: `parse` maps a response object onto
//! the record and `to_json` builds the sparse request payload. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use testrail_core::models::{Plan, Record};
//! use serde_json::json;
//!
//! let plan = Plan {
//!     name: "Release 2.4".to_string(),
//!     description: Some("   ".to_string()),
//!     milestone_id: Some(3),
//!     ..Default::default()
//! };
//!
//! // Blank description and unset entries are left out
//! assert_eq!(plan.to_json(), json!({"name": "Release 2.4", "milestone_id": 3}));
//! ```

pub mod plan;
pub mod plan_entry;
pub mod record;
pub mod run;
pub mod status_counts;


pub use plan::Plan;
pub use plan_entry::PlanEntry;
pub use record::{parse_list, RawJson, Record};
pub use run::Run;
pub use status_counts::StatusCounts;
