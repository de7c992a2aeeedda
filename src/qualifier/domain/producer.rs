//! Producer-role qualifier value.

use super::{ClientRole, NamedConsumer, QualifierDomainError, identity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fully qualified declaration path used in the canonical diagnostic
/// rendering.
const DECLARATION: &str = "messaging_qualifier::NamedProducer";

/// Qualifier value identifying the messaging producer with a given name.
///
/// Two producer qualifiers are interchangeable as binding-map keys whenever
/// their names are equal, regardless of where or when each was constructed.
/// A producer qualifier never equals a [`NamedConsumer`], even for identical
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedProducer(String);

impl NamedProducer {
    /// Creates a producer qualifier for the given client name.
    ///
    /// The name is stored verbatim; no trimming or case-folding is applied.
    ///
    /// # Errors
    ///
    /// Returns [`QualifierDomainError::EmptyName`] when the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, QualifierDomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(QualifierDomainError::EmptyName(ClientRole::Producer));
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
        ClientRole::Producer
    }

    /// Returns the stable identity hash used for binding-map key matching.
    ///
    /// The value is `(127 * h("value")) ^ h(name)`, where `h` is a rolling
    /// 31-based hash over UTF-16 code units with wrapping 32-bit signed
    /// arithmetic. The formula is fixed: independently constructed qualifier
    /// values with equal names must always agree on it.
    #[must_use]
    pub fn identity_hash(&self) -> i32 {
        identity::attribute_hash(identity::VALUE_ATTRIBUTE, &self.0)
    }
}

impl AsRef<str> for NamedProducer {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// A producer qualifier never matches a consumer qualifier; the role is
/// checked before names are compared.
impl PartialEq<NamedConsumer> for NamedProducer {
    fn eq(&self, _other: &NamedConsumer) -> bool {
        false
    }
}

impl Hash for NamedProducer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.identity_hash());
    }
}

impl fmt::Display for NamedProducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{DECLARATION}(value={})", self.0)
    }
}
