//! RocksDB store implementation.

use crate::{
    column_families::all_column_families,
    errors::{Result, StoreError},
    traits::{deserialize_value, serialize_key, Store, StoreTransaction},
};
use async_trait::async_trait;
use rocksdb::{
    BoundColumnFamily, MultiThreaded, Options, Transaction, TransactionDB, TransactionDBOptions,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{path::Path, sync::Arc};
use tracing::debug;

type Db = TransactionDB<MultiThreaded>;

/// RocksDB store implementation
///
/// Backed by a pessimistic `TransactionDB`: reads taken inside a
/// transaction lock their key until commit or rollback, which serializes
/// conflicting writers on the same row.
pub struct RocksDbStore {
    db: Db,
}

impl RocksDbStore {
    /// Open the database at the specified path
    ///
    /// Creates all required column families if they don't exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let txn_opts = TransactionDBOptions::default();
        let db = Db::open_cf(&opts, &txn_opts, &path, all_column_families())
            .map_err(|e| StoreError::Database(e.to_string()))?;

        debug!("Opened RocksDB at {:?}", path.as_ref());

        Ok(Self { db })
    }

    /// Get column family handle
    fn cf_handle(&self, cf: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(cf)
            .ok_or_else(|| StoreError::InvalidColumnFamily(cf.to_string()))
    }
}

#[async_trait]
impl Store for RocksDbStore {
    async fn get<K, V>(&self, cf: &str, key: &K) -> Result<Option<V>>
    where
        K: Serialize + Send + Sync,
        V: DeserializeOwned,
    {
        let cf_handle = self.cf_handle(cf)?;
        let key_bytes = serialize_key(key)?;

        let result = self
            .db
            .get_cf(&cf_handle, &key_bytes)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match result {
            Some(bytes) => {
                let value = deserialize_value(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn exists<K>(&self, cf: &str, key: &K) -> Result<bool>
    where
        K: Serialize + Send + Sync,
    {
        let cf_handle = self.cf_handle(cf)?;
        let key_bytes = serialize_key(key)?;

        let result = self
            .db
            .get_cf(&cf_handle, &key_bytes)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    fn transaction(&self) -> Result<Box<dyn StoreTransaction + '_>> {
        Ok(Box::new(RocksDbTransaction {
            db: &self.db,
            txn: self.db.transaction(),
        }))
    }
}

/// RocksDB transaction implementation
pub struct RocksDbTransaction<'db> {
    db: &'db Db,
    txn: Transaction<'db, Db>,
}

impl<'db> RocksDbTransaction<'db> {
    fn cf_handle(&self, cf: &str) -> Result<Arc<BoundColumnFamily<'db>>> {
        self.db
            .cf_handle(cf)
            .ok_or_else(|| StoreError::InvalidColumnFamily(cf.to_string()))
    }

    /// Locking read used by the constraint checks
    fn locked_get(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let cf_handle = self.cf_handle(cf)?;
        self.txn
            .get_for_update_cf(&cf_handle, key, true)
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}

impl StoreTransaction for RocksDbTransaction<'_> {
    fn get_raw(&mut self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        self.locked_get(cf, key)
    }

    fn put_raw(&mut self, cf: &str, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        let cf_handle = self.cf_handle(cf)?;
        self.txn
            .put_cf(&cf_handle, &key, &value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn insert_raw(&mut self, cf: &str, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        if self.locked_get(cf, &key)?.is_some() {
            return Err(StoreError::UniqueViolation(cf.to_string()));
        }
        self.put_raw(cf, key, value)
    }

    fn require_raw(&mut self, cf: &str, key: &[u8]) -> Result<()> {
        if self.locked_get(cf, key)?.is_none() {
            return Err(StoreError::ForeignKeyViolation(cf.to_string()));
        }
        Ok(())
    }

    fn delete_raw(&mut self, cf: &str, key: Vec<u8>) -> Result<()> {
        let cf_handle = self.cf_handle(cf)?;
        self.txn
            .delete_cf(&cf_handle, &key)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn commit(self: Box<Self>) -> Result<()> {
        self.txn
            .commit()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        debug!("Transaction committed");
        Ok(())
    }

    fn rollback(self: Box<Self>) {
        // Dropping an uncommitted transaction discards it; the explicit
        // rollback releases its locks immediately.
        let _ = self.txn.rollback();
        debug!("Transaction rolled back");
    }
}
