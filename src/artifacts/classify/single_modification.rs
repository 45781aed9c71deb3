use crate::artifacts::classify::ClassifyStrategy;
use crate::domain::diff_record::{Delta, DiffRecord};
use crate::domain::verdict::Verdict;
use derive_new::new;
use regex::Regex;

/// The strict strategy: the diff is ignorable only if every change is a line
/// replaced in place.
///
/// A replacement is a deletion immediately followed by an insertion, both
/// matching the content pattern, and every deletion must have its insertion:
/// unbalanced counts, a non-adjacent insertion, or a single non-matching
/// payload anywhere disqualify the whole stream.
#[derive(Debug, new)]
pub struct SingleModification<'r> {
    content: &'r Regex,
}

impl ClassifyStrategy for SingleModification<'_> {
    fn classify(&self, diffs: &[DiffRecord]) -> Verdict {
        let mut left_only = 0usize;
        let mut right_only = 0usize;
        // 1-based position of the most recent unpaired deletion.
        let mut pending_left: Option<usize> = None;

        for (index, diff) in diffs.iter().enumerate() {
            let position = index + 1;

            if diff.delta == Delta::Common {
                continue;
            }

            if !self.content.is_match(&diff.payload) {
                return Verdict::CHANGED;
            }

            if diff.delta == Delta::LeftOnly {
                left_only += 1;
                pending_left = Some(position);
            } else {
                match pending_left.take() {
                    Some(candidate) if candidate + 1 == position => right_only += 1,
                    // Not a genuine in-place replacement: no pending
                    // deletion, or the insertion is not adjacent to it.
                    _ => return Verdict::CHANGED,
                }
            }
        }

        if left_only != right_only {
            return Verdict::CHANGED;
        }

        Verdict::IGNORED
    }
}
