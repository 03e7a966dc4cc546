//! Plan entry model definition and mapping.

use log::trace;
use serde_json::Value;

use super::{RawJson, Record, Run};
use crate::{
    error::Result,
    json::{Fields, SparseObject},
};

/// A group of runs for one suite inside a test plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanEntry {
    /// Entry identifier (a GUID on current servers)
    pub id: String,

    /// Suite the entry's runs are created from
    pub suite_id: Option<u64>,

    /// Name shared by the entry's runs
    pub name: Option<String>,

    /// Description shared by the entry's runs
    pub description: Option<String>,

    /// User the entry's runs are assigned to
    pub assigned_to_id: Option<u64>,

    /// Whether the runs include every case of the suite
    pub include_all: Option<bool>,

    /// Comma-separated references to external requirements
    pub refs: Option<String>,

    /// Cases selected when `include_all` is false
    pub case_ids: Option<Vec<u64>>,

    /// Configurations to create one run per combination for
    pub config_ids: Option<Vec<u64>>,

    /// The runs of this entry, in server order
    pub runs: Option<Vec<Run>>,

    /// Source object the entry was parsed from
    pub raw: RawJson,
}

impl PlanEntry {
    /// Iterate the entry's runs, empty when none were sent.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter().flatten()
    }
}

impl Record for PlanEntry {
    const KIND: &'static str = "plan entry";

    fn parse(json: &Value) -> Result<Self> {
        let fields = Fields::of(json)?;

        let entry = Self {
            id: fields.key_string("id")?,
            suite_id: fields.opt_u64("suite_id")?,
            name: fields.opt_string("name")?,
            description: fields.opt_string("description")?,
            assigned_to_id: fields.opt_u64("assignedto_id")?,
            include_all: fields.opt_bool("include_all")?,
            refs: fields.opt_string("refs")?,
            case_ids: fields.opt_u64_list("case_ids")?,
            config_ids: fields.opt_u64_list("config_ids")?,
            runs: fields.opt_records("runs")?,
            raw: RawJson::new(json),
        };

        trace!(
            "Parsed plan entry {} with {} runs",
            entry.id,
            entry.runs().count()
        );
        Ok(entry)
    }

    fn to_json(&self) -> Value {
        SparseObject::new()
            .id("suite_id", self.suite_id)
            .text("name", self.name.as_deref())
            .text("description", self.description.as_deref())
            .id("assignedto_id", self.assigned_to_id)
            .flag("include_all", self.include_all)
            .text("refs", self.refs.as_deref())
            .ids("case_ids", self.case_ids.as_deref())
            .ids("config_ids", self.config_ids.as_deref())
            .records("runs", self.runs.as_deref())
            .build()
    }

    fn raw_json(&self) -> Option<&Value> {
        self.raw.get()
    }
}
