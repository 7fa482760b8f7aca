//! Identity types and validation.
//!
//! Authentication itself (credential storage, password verification) is an
//! external collaborator; the core only needs the acting identity to stamp
//! onto events it creates, plus the pure validation the host runs before
//! accepting one.

mod error;
mod types;
mod validation;

pub use error::IdentityError;
pub use types::Identity;
pub use validation::{is_valid_email, validate_identity};
