//! Named-qualifier identity for messaging-client bindings.
//!
//! Processes that talk to several independently configured messaging clients
//! of the same type (for example two Kafka producers writing to different
//! clusters) need a way to tell an injection container which instance a
//! binding or an injection site refers to. This crate provides that key
//! space: per-role qualifier values carrying a single client name, with
//! equality, hashing, and diagnostic rendering fixed so that two values
//! constructed independently at different times and places are
//! interchangeable as map keys.
//!
//! The crate stops at the key space. Binding registration, scope management,
//! client construction, and client lifecycle belong to the container and the
//! messaging library.
//!
//! # Modules
//!
//! - [`qualifier`]: qualifier value types, the client-role axis, and
//!   composite binding keys

pub mod qualifier;

pub use qualifier::domain::{
    BindingKey, ClientRole, NamedConsumer, NamedProducer, ParseClientRoleError,
    QualifierDomainError,
};
