//! Display formatting for records.
//!
//! - [`datetime`]: UTC timestamp formatting
//! - [`models`]: markdown `Display` implementations for plans, entries and
//!   runs
//!
//! ```rust
//! use testrail_core::models::{Plan, Record};
//!
//! let plan = Plan::parse_str(
//!     r#"{"id": 7, "name": "Nightly", "created_by": 1, "created_on": 0,
//!        "is_completed": false, "project_id": 2,
//!        "passed_count": 3, "blocked_count": 0, "untested_count": 1,
//!        "retest_count": 0, "failed_count": 0,
//!        "custom_status1_count": 0, "custom_status2_count": 0,
//!        "custom_status3_count": 0, "custom_status4_count": 0,
//!        "custom_status5_count": 0, "custom_status6_count": 0,
//!        "custom_status7_count": 0}"#,
//! )?;
//!
//! let output = plan.to_string();
//! assert!(output.contains("# 7. Nightly"));
//! assert!(output.contains("- Created: 1970-01-01 00:00:00 UTC"));
//! assert!(output.contains("- Progress: 3/4 tested"));
//! # Ok::<(), testrail_core::ParseError>(())
//! ```

pub mod datetime;
pub mod models;

pub use datetime::UtcDateTime;
