//! # warden-crypto
//!
//! Credential hashing primitives and the shared clock helper used across
//! the warden services.

#![warn(clippy::all)]

pub mod hashing;
pub mod utils;

pub use hashing::{constant_time_compare, credential_digest, digests_match};
pub use utils::current_timestamp;
