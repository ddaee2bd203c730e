//! # warden-storage
//!
//! Storage abstraction layer for warden using RocksDB.
//!
//! This crate defines the transactional store contract consumed by the
//! registries and provides the RocksDB-backed implementation.

#![warn(clippy::all)]

pub mod column_families;
pub mod errors;
pub mod rocksdb_impl;
pub mod traits;

pub use column_families::*;
pub use errors::{Result, StoreError};
pub use rocksdb_impl::RocksDbStore;
pub use traits::{Store, StoreTransaction, StoreTransactionExt};
