//! Store trait definitions.

use crate::errors::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// Point-read interface over the key-structured store
///
/// This trait abstracts the underlying storage implementation (RocksDB)
/// to enable testing with mock implementations. All writes go through
/// [`StoreTransaction`].
#[async_trait]
pub trait Store: Send + Sync {
    /// Get a value by key from a column family
    ///
    /// # Returns
    ///
    /// `Ok(Some(value))` if the key exists, `Ok(None)` if not found
    async fn get<K, V>(&self, cf: &str, key: &K) -> Result<Option<V>>
    where
        K: Serialize + Send + Sync,
        V: DeserializeOwned;

    /// Check if a key exists in a column family
    async fn exists<K>(&self, cf: &str, key: &K) -> Result<bool>
    where
        K: Serialize + Send + Sync;

    /// Begin a transaction
    ///
    /// Every transaction must be committed or rolled back before the
    /// calling task next suspends; nothing may hold one across an await.
    fn transaction(&self) -> Result<Box<dyn StoreTransaction + '_>>;
}

/// Transactional write interface
///
/// Reads taken inside a transaction lock the key for its duration, so
/// conflicting writers serialize and the loser observes the winner's
/// committed row.
///
/// Note: This trait works with pre-serialized bytes to maintain object
/// safety. Use the `StoreTransactionExt` methods for typed access.
pub trait StoreTransaction {
    /// Read a key, locking it for the remainder of the transaction
    ///
    /// For type-safe usage, use `StoreTransactionExt::get` instead.
    fn get_raw(&mut self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Write a pre-serialized key-value pair
    fn put_raw(&mut self, cf: &str, key: Vec<u8>, value: Vec<u8>) -> Result<()>;

    /// Write a key-value pair whose key must not already exist
    ///
    /// Fails with `StoreError::UniqueViolation` naming the column family
    /// when the key is present.
    fn insert_raw(&mut self, cf: &str, key: Vec<u8>, value: Vec<u8>) -> Result<()>;

    /// Assert that a referenced row exists
    ///
    /// Fails with `StoreError::ForeignKeyViolation` naming the column
    /// family when it does not.
    fn require_raw(&mut self, cf: &str, key: &[u8]) -> Result<()>;

    /// Delete a pre-serialized key
    fn delete_raw(&mut self, cf: &str, key: Vec<u8>) -> Result<()>;

    /// Commit the transaction atomically
    fn commit(self: Box<Self>) -> Result<()>;

    /// Roll back the transaction, discarding its writes
    fn rollback(self: Box<Self>);
}

/// Extension trait providing type-safe methods for StoreTransaction
///
/// Serializes keys and values before calling the raw methods.
pub trait StoreTransactionExt: StoreTransaction {
    /// Read a key, locking it (type-safe)
    fn get<K, V>(&mut self, cf: &str, key: &K) -> Result<Option<V>>
    where
        K: Serialize,
        V: DeserializeOwned,
    {
        let key_bytes = serialize_key(key)?;
        match self.get_raw(cf, &key_bytes)? {
            Some(bytes) => Ok(Some(deserialize_value(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Write a key-value pair (type-safe)
    fn put<K, V>(&mut self, cf: &str, key: &K, value: &V) -> Result<()>
    where
        K: Serialize,
        V: Serialize,
    {
        let key_bytes = serialize_key(key)?;
        let value_bytes = serialize_value(value)?;
        self.put_raw(cf, key_bytes, value_bytes)
    }

    /// Write a key-value pair that must not already exist (type-safe)
    fn insert<K, V>(&mut self, cf: &str, key: &K, value: &V) -> Result<()>
    where
        K: Serialize,
        V: Serialize,
    {
        let key_bytes = serialize_key(key)?;
        let value_bytes = serialize_value(value)?;
        self.insert_raw(cf, key_bytes, value_bytes)
    }

    /// Assert that a referenced row exists (type-safe)
    fn require<K>(&mut self, cf: &str, key: &K) -> Result<()>
    where
        K: Serialize,
    {
        let key_bytes = serialize_key(key)?;
        self.require_raw(cf, &key_bytes)
    }

    /// Delete a key (type-safe)
    fn delete<K>(&mut self, cf: &str, key: &K) -> Result<()>
    where
        K: Serialize,
    {
        let key_bytes = serialize_key(key)?;
        self.delete_raw(cf, key_bytes)
    }
}

/// Automatically implement StoreTransactionExt for all transactions
impl<T: StoreTransaction + ?Sized> StoreTransactionExt for T {}

/// Helper function to serialize a key
pub(crate) fn serialize_key<K: Serialize>(key: &K) -> Result<Vec<u8>> {
    bincode::serialize(key).map_err(|e| crate::errors::StoreError::Serialization(e.to_string()))
}

/// Helper function to serialize a value
pub(crate) fn serialize_value<V: Serialize>(value: &V) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| crate::errors::StoreError::Serialization(e.to_string()))
}

/// Helper function to deserialize a value
pub(crate) fn deserialize_value<V: DeserializeOwned>(bytes: &[u8]) -> Result<V> {
    bincode::deserialize(bytes)
        .map_err(|e| crate::errors::StoreError::Deserialization(e.to_string()))
}
