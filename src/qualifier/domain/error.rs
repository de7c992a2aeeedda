//! Error types for qualifier domain validation and parsing.

use super::ClientRole;
use thiserror::Error;

/// Errors returned while constructing qualifier domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QualifierDomainError {
    /// The qualifier name is empty.
    #[error("{0} qualifier name must not be empty")]
    EmptyName(ClientRole),
}

/// Error returned while parsing a client role from configuration or
/// diagnostics input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown client role: {0}")]
pub struct ParseClientRoleError(pub String);
