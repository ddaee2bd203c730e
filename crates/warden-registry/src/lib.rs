//! # warden-registry
//!
//! Table-level operations over the identity store: the user directory,
//! the session registry and the rights registry. Entities are plain data
//! holders; every transaction begins and ends inside a registry method.

#![warn(clippy::all)]

pub mod errors;
pub mod rights;
pub mod sessions;
pub mod types;
pub mod users;


pub use errors::{RegistryError, Result};
pub use rights::RightsRegistry;
pub use sessions::SessionRegistry;
pub use types::{Right, RightGrant, Session, UnknownRight, User};
pub use users::UserDirectory;
