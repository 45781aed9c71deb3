//! Diff-stream classification
//!
//! Evaluates an ordered diff-record stream against the effective ignore rule
//! and reduces it to a [`Verdict`]. Two strategies implement the shared
//! [`ClassifyStrategy`] seam:
//!
//! - `accumulate`: content matching alone is enough to ignore an
//!   insertion-side change
//! - `single_modification`: only adjacent, balanced delete/insert pairs whose
//!   payloads all match the pattern are ignorable
//!
//! Both strategies are pure functions over their inputs; classification of
//! different manifests is independent and freely parallelizable.

pub mod accumulate;
pub mod single_modification;

use crate::artifacts::classify::accumulate::Accumulate;
use crate::artifacts::classify::single_modification::SingleModification;
use crate::domain::diff_record::{Delta, DiffRecord};
use crate::domain::verdict::Verdict;
use derive_new::new;
use regex::Regex;

/// The rule resolved for one manifest: the content pattern (absent when no
/// ignoring is configured) and the strategy selector.
#[derive(Debug, Clone, Copy, new)]
pub struct EffectiveRule<'r> {
    pub content: Option<&'r Regex>,
    pub single_modification: bool,
}

pub trait ClassifyStrategy {
    fn classify(&self, diffs: &[DiffRecord]) -> Verdict;
}

/// Classifies a diff stream under the effective rule.
///
/// Base cases are handled here, before either strategy runs: an empty stream
/// is unchanged; a non-empty stream with no content pattern is a real change;
/// a stream of nothing but common records is unchanged.
pub fn classify(diffs: &[DiffRecord], rule: &EffectiveRule<'_>) -> Verdict {
    if diffs.is_empty() {
        return Verdict::UNCHANGED;
    }

    let Some(content) = rule.content else {
        return Verdict::CHANGED;
    };

    if diffs.iter().all(|diff| diff.delta == Delta::Common) {
        return Verdict::UNCHANGED;
    }

    if rule.single_modification {
        SingleModification::new(content).classify(diffs)
    } else {
        Accumulate::new(content).classify(diffs)
    }
}
