//! Client-role axis of qualifier identity.

use super::ParseClientRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the messaging client a qualifier names.
///
/// The role participates in qualifier identity: a producer qualifier and a
/// consumer qualifier never match, even when their names coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientRole {
    /// The qualifier names a message producer.
    Producer,
    /// The qualifier names a message consumer.
    Consumer,
}

impl ClientRole {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Consumer => "consumer",
        }
    }
}

impl fmt::Display for ClientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ClientRole {
    type Error = ParseClientRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "producer" => Ok(Self::Producer),
            "consumer" => Ok(Self::Consumer),
            _ => Err(ParseClientRoleError(value.to_owned())),
        }
    }
}
