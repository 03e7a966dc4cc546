//! Test run model definition and mapping.

use jiff::Timestamp;
use log::trace;
use serde_json::Value;

use super::{RawJson, Record, StatusCounts};
use crate::{
    error::Result,
    json::{Fields, SparseObject},
};

/// A test run, either standalone or grouped inside a plan entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    /// Unique identifier of the run
    pub id: u64,

    /// Name of the run
    pub name: String,

    /// Description of the run
    pub description: Option<String>,

    /// Suite the run was created from
    pub suite_id: Option<u64>,

    /// Milestone the run is linked to
    pub milestone_id: Option<u64>,

    /// User the run is assigned to
    pub assigned_to_id: Option<u64>,

    /// Whether the run includes every case of its suite
    pub include_all: Option<bool>,

    /// Cases selected for the run when `include_all` is false
    pub case_ids: Option<Vec<u64>>,

    /// Configurations the run covers (runs inside plan entries)
    pub config_ids: Option<Vec<u64>>,

    /// Comma-separated references to external requirements
    pub refs: Option<String>,

    /// Display name of the configuration combination
    pub config: Option<String>,

    /// True once the run has been closed
    pub is_completed: bool,

    /// When the run was closed (UTC)
    pub completed_on: Option<Timestamp>,

    /// User who created the run
    pub created_by: u32,

    /// When the run was created (UTC)
    pub created_on: Timestamp,

    /// Test counts by status
    pub counts: StatusCounts,

    /// Project the run belongs to
    pub project_id: u64,

    /// Plan the run belongs to, if any
    pub plan_id: Option<u64>,

    /// Plan entry the run belongs to, if any
    pub entry_id: Option<String>,

    /// Position of the entry within its plan
    pub entry_index: Option<u32>,

    /// Link to the run in the TestRail UI
    pub url: Option<String>,

    /// Source object the run was parsed from
    pub raw: RawJson,
}

impl Record for Run {
    const KIND: &'static str = "run";

    fn parse(json: &Value) -> Result<Self> {
        let fields = Fields::of(json)?;

        let run = Self {
            id: fields.u64("id")?,
            name: fields.string("name")?,
            description: fields.opt_string("description")?,
            suite_id: fields.opt_u64("suite_id")?,
            milestone_id: fields.opt_u64("milestone_id")?,
            assigned_to_id: fields.opt_u64("assignedto_id")?,
            include_all: fields.opt_bool("include_all")?,
            case_ids: fields.opt_u64_list("case_ids")?,
            config_ids: fields.opt_u64_list("config_ids")?,
            refs: fields.opt_string("refs")?,
            config: fields.opt_string("config")?,
            is_completed: fields.bool("is_completed")?,
            completed_on: fields.opt_timestamp("completed_on")?,
            created_by: fields.u32("created_by")?,
            created_on: fields.timestamp("created_on")?,
            counts: StatusCounts::parse(&fields)?,
            project_id: fields.u64("project_id")?,
            plan_id: fields.opt_u64("plan_id")?,
            entry_id: fields.opt_string("entry_id")?,
            entry_index: fields.opt_u32("entry_index")?,
            url: fields.opt_string("url")?,
            raw: RawJson::new(json),
        };

        trace!("Parsed run {}", run.id);
        Ok(run)
    }

    fn to_json(&self) -> Value {
        SparseObject::new()
            .id("suite_id", self.suite_id)
            .text("name", Some(self.name.as_str()))
            .text("description", self.description.as_deref())
            .id("milestone_id", self.milestone_id)
            .id("assignedto_id", self.assigned_to_id)
            .flag("include_all", self.include_all)
            .ids("case_ids", self.case_ids.as_deref())
            .ids("config_ids", self.config_ids.as_deref())
            .text("refs", self.refs.as_deref())
            .build()
    }

    fn raw_json(&self) -> Option<&Value> {
        self.raw.get()
    }
}
