//! Per-status test counters shared by plans and runs.

use serde::{Deserialize, Serialize};

use crate::{error::Result, json::Fields};

/// Number of custom statuses a TestRail instance can define.
pub const CUSTOM_STATUS_COUNT: usize = 7;

/// Test counts by status, as reported by the server.
///
/// All counters are read-only server fields and required on the wire.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub passed: u32,
    pub blocked: u32,
    pub untested: u32,
    pub retest: u32,
    pub failed: u32,
    /// `custom_status1_count` through `custom_status7_count`, in order
    pub custom: [u64; CUSTOM_STATUS_COUNT],
}

impl StatusCounts {
    /// Read the counters from the flat `*_count` keys of a plan or run.
    pub fn parse(fields: &Fields<'_>) -> Result<Self> {
        let mut counts = Self {
            passed: fields.u32("passed_count")?,
            blocked: fields.u32("blocked_count")?,
            untested: fields.u32("untested_count")?,
            retest: fields.u32("retest_count")?,
            failed: fields.u32("failed_count")?,
            custom: [0; CUSTOM_STATUS_COUNT],
        };

        for (index, slot) in counts.custom.iter_mut().enumerate() {
            *slot = fields.u64(&format!("custom_status{}_count", index + 1))?;
        }

        Ok(counts)
    }

    /// Total number of tests across every status, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.passed,
            self.blocked,
            self.untested,
            self.retest,
            self.failed,
        ]
        .iter()
        .map(|&count| u64::from(count))
        .chain(self.custom.iter().copied())
        .fold(0u64, u64::saturating_add)
    }

    /// Tests that have any result, i.e. everything but untested.
    pub fn tested(&self) -> u64 {
        self.total().saturating_sub(u64::from(self.untested))
    }

    /// Fraction of tests with a result, or `None` when there are no tests.
    pub fn completion_ratio(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.tested() as f64 / total as f64)
    }
}
