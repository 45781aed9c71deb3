use derive_new::new;
use std::fmt::Display;

/// Which side of the comparison a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    /// The line is present in both versions.
    Common,
    /// The line is present only in the left (old) version.
    LeftOnly,
    /// The line is present only in the right (new) version.
    RightOnly,
}

/// One line-level unit of a computed diff.
///
/// A classification call consumes an ordered slice of these; the ordering
/// reflects the original document order and is the only signal available for
/// adjacency reasoning, so callers must not reorder records.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffRecord {
    pub delta: Delta,
    pub payload: String,
}

impl DiffRecord {
    pub fn common(payload: impl Into<String>) -> Self {
        Self::new(Delta::Common, payload.into())
    }

    pub fn left_only(payload: impl Into<String>) -> Self {
        Self::new(Delta::LeftOnly, payload.into())
    }

    pub fn right_only(payload: impl Into<String>) -> Self {
        Self::new(Delta::RightOnly, payload.into())
    }

    pub fn as_string(&self) -> String {
        match self.delta {
            Delta::LeftOnly => format!("-{}", self.payload),
            Delta::RightOnly => format!("+{}", self.payload),
            Delta::Common => format!(" {}", self.payload),
        }
    }
}

impl Display for DiffRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
