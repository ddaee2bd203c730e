//! User directory operations.

use crate::{
    errors::{RegistryError, Result},
    types::User,
};
use std::sync::Arc;
use tracing::info;
use warden_crypto::digests_match;
use warden_storage::{Store, StoreError, StoreTransactionExt, CF_USERS};

/// Table-level operations on user records
pub struct UserDirectory<S: Store> {
    store: Arc<S>,
}

impl<S: Store> UserDirectory<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a new user record
    ///
    /// The write is committed as a single transaction. Fails with
    /// `UserExists` when the store reports a uniqueness violation on the
    /// username.
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<User> {
        if username.is_empty() || password_hash.is_empty() {
            return Err(RegistryError::InvalidInput(
                "a username and a password hash are required",
            ));
        }

        let user = User {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };

        let mut txn = self.store.transaction()?;
        match txn.insert(CF_USERS, &user.username, &user) {
            Ok(()) => {
                txn.commit()?;
                info!("user created: {}", user.username);
                Ok(user)
            }
            Err(StoreError::UniqueViolation(_)) => {
                txn.rollback();
                Err(RegistryError::UserExists(user.username))
            }
            Err(e) => {
                txn.rollback();
                Err(e.into())
            }
        }
    }

    /// Determine whether a user with the given credentials exists
    ///
    /// Absence is a normal boolean outcome here; no error is raised for
    /// an unknown username. The digest comparison runs in constant time.
    pub async fn exists(&self, username: &str, password_hash: &str) -> Result<bool> {
        let stored: Option<User> = self.store.get(CF_USERS, &username).await?;

        Ok(stored
            .map(|user| digests_match(&user.password_hash, password_hash))
            .unwrap_or(false))
    }
}
