use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier for a Topic.
///
/// Content documents carry topic ids either as JSON numbers or strings.
/// Both forms normalize to the string representation, so topic/quiz
/// matching is always plain string equality.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TopicId(String);

impl TopicId {
    /// Creates a new `TopicId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicId({})", self.0)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for TopicId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        string_or_number(deserializer).map(TopicId)
    }
}

/// Accepts a JSON string or number and yields the string form.
///
/// Shared by every id-bearing field in the content documents.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(i64),
        Text(String),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Num(n) => n.to_string(),
        Repr::Text(s) => s,
    })
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
