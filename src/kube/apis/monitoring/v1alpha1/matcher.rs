use serde::{Deserialize, Serialize};

/// Matcher defines how to match on alert's labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct Matcher {
    /// Label to match.
    pub name: String,

    /// Label value to match.
    pub value: String,

    /// Whether to match on equality (false) or regular-expression (true).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub regex: bool,
}

impl Matcher {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            regex: false,
        }
    }

    pub fn regex(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            regex: true,
            ..Self::new(name, value)
        }
    }
}
