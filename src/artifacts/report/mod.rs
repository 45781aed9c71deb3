//! Aggregation of per-manifest verdicts
//!
//! A release comparison classifies many manifests; the caller folds each
//! [`Verdict`] into a [`ComparisonSummary`] and reads off the final
//! [`Outcome`], which carries the detailed exit code the surrounding tool
//! reports when asked to. Nothing here exits the process.

use crate::domain::verdict::Verdict;

/// Final result of a release comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No differences in any manifest.
    Unchanged,
    /// At least one unignored change.
    Changed,
    /// No unignored changes, but at least one ignored one.
    OnlyIgnored,
}

impl Outcome {
    /// The detailed exit code for this outcome:
    /// 0 for no changes, 2 for real changes, 3 for only ignored changes.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Unchanged => 0,
            Outcome::Changed => 2,
            Outcome::OnlyIgnored => 3,
        }
    }

    /// Message the tool prints alongside a non-zero detailed exit code.
    pub fn summary_message(&self) -> Option<&'static str> {
        match self {
            Outcome::Unchanged => None,
            Outcome::Changed => Some("identified at least one change"),
            Outcome::OnlyIgnored => Some("identified at least one ignored change"),
        }
    }
}

/// Running aggregate over the verdicts of a release comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonSummary {
    seen_any_changes: bool,
    ignored_any_changes: bool,
}

impl ComparisonSummary {
    pub fn record(&mut self, verdict: Verdict) {
        self.seen_any_changes |= verdict.seen_any_changes;
        self.ignored_any_changes |= verdict.ignored_any_changes;
    }

    /// An unignored change anywhere dominates; ignored changes only surface
    /// when no manifest saw a real one.
    pub fn outcome(&self) -> Outcome {
        if self.seen_any_changes {
            Outcome::Changed
        } else if self.ignored_any_changes {
            Outcome::OnlyIgnored
        } else {
            Outcome::Unchanged
        }
    }
}
