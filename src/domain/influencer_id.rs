/// Opaque catalog identifier, e.g. `emma-foodie-hist`.
///
/// Any string is accepted: selections may carry ids the catalog no longer
/// knows about, and those are dropped when recipients are resolved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct InfluencerId(String);

impl AsRef<str> for InfluencerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InfluencerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InfluencerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for InfluencerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
