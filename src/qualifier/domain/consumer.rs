//! Consumer-role qualifier value.

use super::{ClientRole, NamedProducer, QualifierDomainError, identity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fully qualified declaration path used in the canonical diagnostic
/// rendering.
const DECLARATION: &str = "messaging_qualifier::NamedConsumer";

/// Qualifier value identifying the messaging consumer with a given name.
///
/// Mirrors [`NamedProducer`] for the consumer role: equality is exact name
/// equality within the role, the identity hash follows the same fixed
/// formula, and a consumer qualifier never equals a producer qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedConsumer(String);

impl NamedConsumer {
    /// Creates a consumer qualifier for the given client name.
    ///
    /// The name is stored verbatim; no trimming or case-folding is applied.
    ///
    /// # Errors
    ///
    /// Returns [`QualifierDomainError::EmptyName`] when the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, QualifierDomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(QualifierDomainError::EmptyName(ClientRole::Consumer));
        }
        Ok(Self(name))
    }

    /// Returns the client name as a string slice.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the role this qualifier names.
    #[must_use]
    pub const fn role(&self) -> ClientRole {
        ClientRole::Consumer
    }

    /// Returns the stable identity hash used for binding-map key matching.
    ///
    /// Same formula as [`NamedProducer::identity_hash`]; the role does not
    /// participate in the hash, only in equality.
    #[must_use]
    pub fn identity_hash(&self) -> i32 {
        identity::attribute_hash(identity::VALUE_ATTRIBUTE, &self.0)
    }
}

impl AsRef<str> for NamedConsumer {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// A consumer qualifier never matches a producer qualifier; the role is
/// checked before names are compared.
impl PartialEq<NamedProducer> for NamedConsumer {
    fn eq(&self, _other: &NamedProducer) -> bool {
        false
    }
}

impl Hash for NamedConsumer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.identity_hash());
    }
}

impl fmt::Display for NamedConsumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{DECLARATION}(value={})", self.0)
    }
}
