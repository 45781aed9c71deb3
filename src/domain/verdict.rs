use derive_new::new;

/// The classifier's answer for one manifest pair.
///
/// The two booleans are independent signals, not a three-state enum: a caller
/// aggregates them across all manifests of a release comparison before
/// deciding what to do (see `artifacts::report`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Verdict {
    /// At least one unignored change was observed.
    pub seen_any_changes: bool,
    /// At least one change was suppressed by the effective ignore rule.
    pub ignored_any_changes: bool,
}

impl Verdict {
    /// No differences at all.
    pub const UNCHANGED: Self = Self {
        seen_any_changes: false,
        ignored_any_changes: false,
    };

    /// A real, unignored change.
    pub const CHANGED: Self = Self {
        seen_any_changes: true,
        ignored_any_changes: false,
    };

    /// Every observed change was covered by the effective ignore rule.
    pub const IGNORED: Self = Self {
        seen_any_changes: false,
        ignored_any_changes: true,
    };
}
