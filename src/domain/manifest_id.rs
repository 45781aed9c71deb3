use derive_new::new;

/// Caller-defined identity of one manifest within a release.
///
/// The identity is an opaque string as far as rule resolution is concerned;
/// identity-scoped ignore rules match against it with their identity regex.
/// [`ManifestId::from_parts`] builds the `namespace, name, kind` form used by
/// the surrounding diff tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct ManifestId(String);

impl ManifestId {
    pub fn from_parts(namespace: &str, name: &str, kind: &str) -> Self {
        Self(format!("{namespace}, {name}, {kind}"))
    }
}

impl AsRef<str> for ManifestId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ManifestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ManifestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
