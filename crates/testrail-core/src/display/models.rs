//! Display implementations for records.
//!
//! Records format as markdown for terminal rendering: a heading, a metadata
//! list, the optional description, and a progress line built from the
//! status counters.

use std::fmt;

use super::datetime::UtcDateTime;
use crate::models::{Plan, PlanEntry, Run, StatusCounts};

fn status_label(is_completed: bool) -> &'static str {
    if is_completed {
        "completed"
    } else {
        "active"
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} tested ({} passed, {} failed, {} blocked, {} retest)",
            self.tested(),
            self.total(),
            self.passed,
            self.failed,
            self.blocked,
            self.retest
        )
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Project: {}", self.project_id)?;
        writeln!(f, "- Status: {}", status_label(self.is_completed))?;
        writeln!(f, "- Created: {}", UtcDateTime(&self.created_on))?;
        if let Some(completed_on) = &self.completed_on {
            writeln!(f, "- Completed: {}", UtcDateTime(completed_on))?;
        }
        if let Some(milestone_id) = self.milestone_id {
            writeln!(f, "- Milestone: {milestone_id}")?;
        }
        if let Some(user_id) = self.assigned_to_id {
            writeln!(f, "- Assigned to: user {user_id}")?;
        }
        if let Some(url) = &self.url {
            writeln!(f, "- URL: {url}")?;
        }
        if self.counts.total() > 0 {
            writeln!(f, "- Progress: {}", self.counts)?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        match self.entries.as_deref() {
            Some(entries) if !entries.is_empty() => {
                writeln!(f, "\n## Entries")?;
                writeln!(f)?;
                for entry in entries {
                    write!(f, "{entry}")?;
                }
            }
            _ => writeln!(f, "\nNo entries in this plan.")?,
        }

        Ok(())
    }
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("Unnamed entry");
        writeln!(f, "### {name} ({})", self.id)?;
        writeln!(f)?;

        if let Some(suite_id) = self.suite_id {
            writeln!(f, "- Suite: {suite_id}")?;
        }
        if let Some(desc) = &self.description {
            writeln!(f, "- Description: {desc}")?;
        }
        for run in self.runs() {
            run.fmt_compact(f)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl Run {
    /// One-line format used when the run is listed inside a plan entry.
    fn fmt_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- Run {}. {}", self.id, self.name)?;
        if let Some(config) = &self.config {
            write!(f, " [{config}]")?;
        }
        if self.is_completed {
            write!(f, " (completed)")?;
        }
        writeln!(f, ": {}/{}", self.counts.tested(), self.counts.total())
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Project: {}", self.project_id)?;
        if let Some(plan_id) = self.plan_id {
            writeln!(f, "- Plan: {plan_id}")?;
        }
        writeln!(f, "- Status: {}", status_label(self.is_completed))?;
        writeln!(f, "- Created: {}", UtcDateTime(&self.created_on))?;
        if let Some(completed_on) = &self.completed_on {
            writeln!(f, "- Completed: {}", UtcDateTime(completed_on))?;
        }
        if let Some(config) = &self.config {
            writeln!(f, "- Configuration: {config}")?;
        }
        if let Some(url) = &self.url {
            writeln!(f, "- URL: {url}")?;
        }
        writeln!(f, "- Progress: {}", self.counts)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}
