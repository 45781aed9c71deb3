//! Ignore-rule classification for manifest diffs.
//!
//! Given a line-level diff between two versions of a manifest and a set of
//! user-configured ignore rules, this crate decides whether the differences
//! constitute a real change or can be suppressed. It consumes an
//! already-computed stream of diff records; it never computes diffs, parses
//! manifests or performs I/O itself.
//!
//! - `domain`: core value types (diff records, manifest identities, verdicts)
//! - `artifacts`: rule configuration, classification strategies and reporting

pub mod artifacts;
pub mod domain;
