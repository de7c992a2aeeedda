//! Named qualifier identity for messaging-client bindings.
//!
//! This module implements the qualifier key space used to disambiguate
//! multiple configured instances of the same messaging-client type inside a
//! dependency-injection container:
//!
//! - Domain value types in [`domain`]
//!
//! The container itself and the messaging client library are external
//! collaborators; they interact with this module only through the equality,
//! hashing, and rendering contracts of the domain types.

pub mod domain;

#[cfg(test)]
mod tests;
