//! Rights registry operations.
//!
//! Grants are keyed by the (username, right) pair. Both grant and revoke
//! are idempotent; only grant can fail on a missing user, since revoke
//! never distinguishes "no such user" from "no such grant".

use crate::{
    errors::{RegistryError, Result},
    types::{Right, RightGrant},
};
use std::sync::Arc;
use tracing::info;
use warden_storage::{
    Store, StoreError, StoreTransaction, StoreTransactionExt, CF_USERS, CF_USER_RIGHTS,
};

/// Table-level operations on right grants
pub struct RightsRegistry<S: Store> {
    store: Arc<S>,
}

impl<S: Store> RightsRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Find a grant for a user
    pub async fn find(&self, username: &str, right: Right) -> Result<Option<RightGrant>> {
        if username.is_empty() {
            return Err(RegistryError::InvalidInput("a username is required"));
        }

        Ok(self.store.get(CF_USER_RIGHTS, &(username, right)).await?)
    }

    /// Grant a right to a user
    ///
    /// Granting an already-held right returns the existing grant
    /// unchanged. Fails with `UserNotFound` when the store reports a
    /// referential-integrity violation on the username.
    pub async fn grant(&self, username: &str, right: Right) -> Result<RightGrant> {
        if username.is_empty() {
            return Err(RegistryError::InvalidInput("a username is required"));
        }

        if let Some(existing) = self.find(username, right).await? {
            return Ok(existing);
        }

        let grant = RightGrant {
            username: username.to_string(),
            right,
        };

        let mut txn = self.store.transaction()?;
        match Self::stage_grant(txn.as_mut(), username, right, &grant) {
            Ok(()) => {
                txn.commit()?;
                info!("right {} granted to {}", right, grant.username);
                Ok(grant)
            }
            Err(StoreError::ForeignKeyViolation(_)) => {
                txn.rollback();
                Err(RegistryError::UserNotFound(grant.username))
            }
            Err(StoreError::UniqueViolation(_)) => {
                // Lost a race against a concurrent grant of the same
                // right; the surviving row is exactly the grant we
                // wanted.
                txn.rollback();
                Ok(grant)
            }
            Err(e) => {
                txn.rollback();
                Err(e.into())
            }
        }
    }

    fn stage_grant(
        txn: &mut (dyn StoreTransaction + '_),
        username: &str,
        right: Right,
        grant: &RightGrant,
    ) -> std::result::Result<(), StoreError> {
        txn.require(CF_USERS, &username)?;
        txn.insert(CF_USER_RIGHTS, &(username, right), grant)
    }

    /// Revoke a right from a user
    ///
    /// Revoking an absent grant succeeds as a no-op. One commit.
    pub async fn revoke(&self, username: &str, right: Right) -> Result<()> {
        if username.is_empty() {
            return Err(RegistryError::InvalidInput("a username is required"));
        }

        if self.find(username, right).await?.is_none() {
            return Ok(());
        }

        let mut txn = self.store.transaction()?;
        if let Err(e) = txn.delete(CF_USER_RIGHTS, &(username, right)) {
            txn.rollback();
            return Err(e.into());
        }
        txn.commit()?;

        info!("right {} revoked from {}", right, username);
        Ok(())
    }
}
