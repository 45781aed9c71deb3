use crate::artifacts::classify::EffectiveRule;
use crate::artifacts::rules::rule::{CatchAllRule, CatchAllSpec, ScopedRule, ScopedSpec};
use crate::domain::manifest_id::ManifestId;
use anyhow::Context;

/// The complete ignore configuration for one release comparison.
///
/// Built once, before any manifest is classified; every pattern is compiled at
/// construction so a malformed rule aborts the comparison up front instead of
/// surfacing mid-run. Scoped rules are stored pre-sorted by precedence:
/// descending identity-pattern length, equal lengths ordered lexicographically
/// by pattern string so resolution never depends on configuration order.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    catch_all: CatchAllRule,
    scoped: Vec<ScopedRule>,
}

impl IgnoreRuleSet {
    /// Builds a rule set from the raw JSON configuration values.
    ///
    /// `catch_all` carries a single rule object, `scoped` an array of
    /// identity-scoped rule objects; either may be absent.
    pub fn try_parse(catch_all: Option<&str>, scoped: Option<&str>) -> anyhow::Result<Self> {
        let catch_all_spec = match catch_all {
            Some(value) => serde_json::from_str::<CatchAllSpec>(value)
                .context("failed to parse ignore rule argument")?,
            None => CatchAllSpec::default(),
        };
        let scoped_specs = match scoped {
            Some(value) => serde_json::from_str::<Vec<ScopedSpec>>(value)
                .context("failed to parse scoped ignore rules argument")?,
            None => Vec::new(),
        };

        Self::from_specs(&catch_all_spec, &scoped_specs)
    }

    pub fn from_specs(catch_all: &CatchAllSpec, scoped: &[ScopedSpec]) -> anyhow::Result<Self> {
        let catch_all = CatchAllRule::try_parse(catch_all)?;
        let mut scoped = scoped
            .iter()
            .map(ScopedRule::try_parse)
            .collect::<anyhow::Result<Vec<_>>>()?;

        scoped.sort_by(|a, b| {
            b.identity_pattern()
                .len()
                .cmp(&a.identity_pattern().len())
                .then_with(|| a.identity_pattern().cmp(b.identity_pattern()))
        });

        Ok(Self { catch_all, scoped })
    }

    /// Selects the single rule effective for the given manifest.
    ///
    /// The first matching scoped rule in precedence order wins; the catch-all
    /// applies when none matches (its content pattern may be absent, in which
    /// case any change under it is real).
    pub fn resolve(&self, id: &ManifestId) -> EffectiveRule<'_> {
        for rule in &self.scoped {
            if rule.applies_to(id) {
                return EffectiveRule::new(rule.content(), rule.single_modification());
            }
        }

        EffectiveRule::new(self.catch_all.content(), self.catch_all.single_modification())
    }
}
