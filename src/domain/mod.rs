//! Core value types shared by the rule and classification layers
//!
//! - `diff_record`: one line-level unit of comparison between two manifests
//! - `manifest_id`: caller-defined identity string used for rule selection
//! - `verdict`: the classifier's two-boolean answer for one manifest pair

pub mod diff_record;
pub mod manifest_id;
pub mod verdict;
