use crate::domain::manifest_id::ManifestId;
use anyhow::Context;
use regex::Regex;
use serde::Deserialize;

/// Wire form of the catch-all ignore rule.
///
/// An empty `contentRegexp` means no ignoring is configured under this rule;
/// it is lifted to `None` when the rule is compiled so it cannot be confused
/// with a pattern that matches the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatchAllSpec {
    pub content_regexp: String,
    pub single_modification: bool,
}

/// Wire form of one identity-scoped ignore rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopedSpec {
    pub id_regexp: String,
    pub content_regexp: String,
    pub single_modification: bool,
}

/// The catch-all rule, compiled. Applies when no scoped rule matches.
#[derive(Debug, Clone, Default)]
pub struct CatchAllRule {
    content: Option<Regex>,
    single_modification: bool,
}

impl CatchAllRule {
    pub fn try_parse(spec: &CatchAllSpec) -> anyhow::Result<Self> {
        Ok(Self {
            content: compile_content(&spec.content_regexp)?,
            single_modification: spec.single_modification,
        })
    }

    pub fn content(&self) -> Option<&Regex> {
        self.content.as_ref()
    }

    pub fn single_modification(&self) -> bool {
        self.single_modification
    }
}

/// One identity-scoped rule, compiled.
#[derive(Debug, Clone)]
pub struct ScopedRule {
    identity: Regex,
    content: Option<Regex>,
    single_modification: bool,
}

impl ScopedRule {
    pub fn try_parse(spec: &ScopedSpec) -> anyhow::Result<Self> {
        let identity = Regex::new(&spec.id_regexp)
            .with_context(|| format!("invalid identity pattern `{}`", spec.id_regexp))?;

        Ok(Self {
            identity,
            content: compile_content(&spec.content_regexp)?,
            single_modification: spec.single_modification,
        })
    }

    /// Substring-match semantics, the regex crate default.
    pub fn applies_to(&self, id: &ManifestId) -> bool {
        self.identity.is_match(id.as_ref())
    }

    pub fn identity_pattern(&self) -> &str {
        self.identity.as_str()
    }

    pub fn content(&self) -> Option<&Regex> {
        self.content.as_ref()
    }

    pub fn single_modification(&self) -> bool {
        self.single_modification
    }
}

fn compile_content(pattern: &str) -> anyhow::Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }

    Regex::new(pattern)
        .map(Some)
        .with_context(|| format!("invalid content pattern `{pattern}`"))
}
