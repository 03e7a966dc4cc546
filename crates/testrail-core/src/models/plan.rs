//! Plan model definition and mapping.

use jiff::Timestamp;
use log::debug;
use serde_json::Value;

use super::{PlanEntry, RawJson, Record, Run, StatusCounts};
use crate::{
    error::Result,
    json::{Fields, SparseObject},
};

/// A test plan: a named group of plan entries, each holding runs.
///
/// Build one by hand with `..Default::default()` for a create/update
/// request; only `name`, `description`, `milestone_id` and `entries` are
/// sent back to the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Name of the plan
    pub name: String,

    /// Description of the plan
    pub description: Option<String>,

    /// Milestone the plan is linked to
    pub milestone_id: Option<u64>,

    /// User who created the plan
    pub created_by: u32,

    /// When the plan was created (UTC)
    pub created_on: Timestamp,

    /// True once the plan has been closed
    pub is_completed: bool,

    /// When the plan was closed (UTC)
    pub completed_on: Option<Timestamp>,

    /// Test counts by status across all runs of the plan
    pub counts: StatusCounts,

    /// Project the plan belongs to
    pub project_id: u64,

    /// User the plan is assigned to
    pub assigned_to_id: Option<u64>,

    /// Link to the plan in the TestRail UI
    pub url: Option<String>,

    /// Plan entries in display order; `None` when the server omitted them
    pub entries: Option<Vec<PlanEntry>>,

    /// Source object the plan was parsed from
    pub raw: RawJson,
}

impl Plan {
    /// Iterate every run of every entry, in entry order.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.entries.iter().flatten().flat_map(|entry| entry.runs())
    }
}

impl Record for Plan {
    const KIND: &'static str = "plan";

    fn parse(json: &Value) -> Result<Self> {
        let fields = Fields::of(json)?;

        let plan = Self {
            id: fields.u64("id")?,
            name: fields.string("name")?,
            description: fields.opt_string("description")?,
            milestone_id: fields.opt_u64("milestone_id")?,
            created_by: fields.u32("created_by")?,
            created_on: fields.timestamp("created_on")?,
            is_completed: fields.bool("is_completed")?,
            completed_on: fields.opt_timestamp("completed_on")?,
            counts: StatusCounts::parse(&fields)?,
            project_id: fields.u64("project_id")?,
            assigned_to_id: fields.opt_u64("assignedto_id")?,
            url: fields.opt_string("url")?,
            entries: fields.opt_records("entries")?,
            raw: RawJson::new(json),
        };

        debug!(
            "Parsed plan {} with {} entries",
            plan.id,
            plan.entries.as_ref().map_or(0, Vec::len)
        );
        Ok(plan)
    }

    fn to_json(&self) -> Value {
        SparseObject::new()
            .text("name", Some(self.name.as_str()))
            .text("description", self.description.as_deref())
            .id("milestone_id", self.milestone_id)
            .records("entries", self.entries.as_deref())
            .build()
    }

    fn raw_json(&self) -> Option<&Value> {
        self.raw.get()
    }
}
