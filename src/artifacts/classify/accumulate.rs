use crate::artifacts::classify::ClassifyStrategy;
use crate::domain::diff_record::{Delta, DiffRecord};
use crate::domain::verdict::Verdict;
use derive_new::new;
use regex::Regex;

/// The permissive strategy: content matching alone is enough to ignore an
/// insertion-side change.
///
/// Deletions are never ignorable on their own; only a matching insertion
/// elsewhere in the stream can flip the final verdict to ignored. That
/// asymmetry is deliberate: a deletion paired with a matching replacement is
/// treated as fully ignored, while a bare deletion is always a real change.
#[derive(Debug, new)]
pub struct Accumulate<'r> {
    content: &'r Regex,
}

impl ClassifyStrategy for Accumulate<'_> {
    fn classify(&self, diffs: &[DiffRecord]) -> Verdict {
        let mut seen_any_changes = false;
        let mut ignored_any_changes = false;

        for diff in diffs {
            match diff.delta {
                Delta::Common => {}
                Delta::LeftOnly => seen_any_changes = true,
                Delta::RightOnly => {
                    if self.content.is_match(&diff.payload) {
                        ignored_any_changes = true;
                    } else {
                        seen_any_changes = true;
                    }
                }
            }
        }

        // A change that is also covered by the pattern (a deletion paired
        // with a matching insertion) counts as fully ignored.
        if seen_any_changes && ignored_any_changes {
            return Verdict::IGNORED;
        }

        Verdict::new(seen_any_changes, ignored_any_changes)
    }
}
