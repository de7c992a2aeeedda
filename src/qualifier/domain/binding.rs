//! Composite key under which a messaging-client binding is registered.

use super::{ClientRole, NamedConsumer, NamedProducer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key pairing a client role with its named qualifier.
///
/// A single binding map can hold producer and consumer bindings side by
/// side: the variant tag participates in equality and hashing, so a producer
/// and a consumer registered under the same name remain distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKey {
    /// Binding for a named message producer.
    Producer(NamedProducer),
    /// Binding for a named message consumer.
    Consumer(NamedConsumer),
}

impl BindingKey {
    /// Returns the client role of the underlying qualifier.
    #[must_use]
    pub const fn role(&self) -> ClientRole {
        match self {
            Self::Producer(_) => ClientRole::Producer,
            Self::Consumer(_) => ClientRole::Consumer,
        }
    }

    /// Returns the client name of the underlying qualifier.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Producer(qualifier) => qualifier.name(),
            Self::Consumer(qualifier) => qualifier.name(),
        }
    }
}

impl From<NamedProducer> for BindingKey {
    fn from(qualifier: NamedProducer) -> Self {
        Self::Producer(qualifier)
    }
}

impl From<NamedConsumer> for BindingKey {
    fn from(qualifier: NamedConsumer) -> Self {
        Self::Consumer(qualifier)
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Producer(qualifier) => write!(f, "{qualifier}"),
            Self::Consumer(qualifier) => write!(f, "{qualifier}"),
        }
    }
}
