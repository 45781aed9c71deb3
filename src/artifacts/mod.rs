//! Rule configuration and classification algorithms
//!
//! - `rules`: ignore-rule wire format, compilation and precedence resolution
//! - `classify`: the two diff-classification strategies and their dispatch
//! - `report`: aggregation of per-manifest verdicts into an exit-code outcome

pub mod classify;
pub mod report;
pub mod rules;
