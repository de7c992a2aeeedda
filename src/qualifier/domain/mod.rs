//! Domain model for named messaging-client qualifiers.
//!
//! Qualifier values are immutable, side-effect-free value objects; every
//! identity rule (same-role name equality, the fixed identity hash, and
//! cross-role inequality) lives here. They may be constructed, compared,
//! hashed, and rendered concurrently from any number of threads without
//! coordination. All infrastructure concerns are kept outside the domain
//! boundary.

mod binding;
mod consumer;
mod error;
pub(crate) mod identity;
mod producer;
mod role;

pub use binding::BindingKey;
pub use consumer::NamedConsumer;
pub use error::{ParseClientRoleError, QualifierDomainError};
pub use producer::NamedProducer;
pub use role::ClientRole;
