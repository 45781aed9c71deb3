//! Ignore-rule configuration
//!
//! Rules arrive as JSON values (the `--ignore` and `--ignoreMultipart`
//! configuration payloads of the surrounding tool), are compiled eagerly into
//! regexes at load time, and are read-only afterwards.
//!
//! - `rule`: wire specs and their compiled forms
//! - `rule_set`: the full rule set with precedence resolution

pub mod rule;
pub mod rule_set;
