//! Session registry operations.
//!
//! State machine per session: active, then inactive, with no transition
//! back. The active-session index (username to token) is maintained in
//! the same transaction as the session record, which is what turns the
//! one-active-session-per-user rule into a store-enforced constraint.

use crate::{
    errors::{RegistryError, Result},
    types::Session,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use warden_crypto::current_timestamp;
use warden_storage::{
    Store, StoreError, StoreTransaction, StoreTransactionExt, CF_ACTIVE_SESSIONS, CF_SESSIONS,
    CF_USERS,
};

/// Table-level operations on session records
pub struct SessionRegistry<S: Store> {
    store: Arc<S>,
}

impl<S: Store> SessionRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a new active session for a user
    ///
    /// Generates a fresh token and commits the session record together
    /// with its active-session index row. Fails with `UserNotFound` when
    /// the user row is absent and with `ActiveSessionExists` when the
    /// index already holds a row for the user.
    pub async fn create(&self, username: &str) -> Result<Session> {
        if username.is_empty() {
            return Err(RegistryError::InvalidInput("a username is required"));
        }

        let now = current_timestamp();
        let session = Session {
            token: Uuid::new_v4().to_string(),
            username: username.to_string(),
            active: true,
            created: now,
            updated: now,
        };

        let mut txn = self.store.transaction()?;
        match Self::stage_create(txn.as_mut(), &session) {
            Ok(()) => {
                txn.commit()?;
                info!("session created for {}", session.username);
                Ok(session)
            }
            Err(StoreError::ForeignKeyViolation(_)) => {
                txn.rollback();
                Err(RegistryError::UserNotFound(session.username))
            }
            Err(StoreError::UniqueViolation(cf)) if cf == CF_ACTIVE_SESSIONS => {
                txn.rollback();
                Err(RegistryError::ActiveSessionExists(session.username))
            }
            Err(e) => {
                txn.rollback();
                Err(e.into())
            }
        }
    }

    fn stage_create(
        txn: &mut (dyn StoreTransaction + '_),
        session: &Session,
    ) -> std::result::Result<(), StoreError> {
        txn.require(CF_USERS, &session.username)?;
        txn.insert(CF_ACTIVE_SESSIONS, &session.username, &session.token)?;
        txn.insert(CF_SESSIONS, &session.token, session)
    }

    /// Find the single active session for a user, if any
    pub async fn find_active_for_user(&self, username: &str) -> Result<Option<Session>> {
        let token: Option<String> = self.store.get(CF_ACTIVE_SESSIONS, &username).await?;
        let Some(token) = token else {
            return Ok(None);
        };

        // The index row and the session record are written in one
        // transaction; a dangling or inactive target is corruption, not
        // a domain outcome.
        let session: Option<Session> = self.store.get(CF_SESSIONS, &token).await?;
        match session {
            Some(session) if session.active => Ok(Some(session)),
            _ => Err(RegistryError::Inconsistent(format!(
                "active-session index for {username} references a missing or inactive session"
            ))),
        }
    }

    /// Find a session by its token
    ///
    /// With `active_only` set, deactivated sessions are filtered out.
    /// The unfiltered form exists for idempotency checks and must never
    /// feed authorization.
    pub async fn find_by_token(&self, token: &str, active_only: bool) -> Result<Option<Session>> {
        let session: Option<Session> = self.store.get(CF_SESSIONS, &token).await?;
        Ok(session.filter(|s| s.active || !active_only))
    }

    /// Get the active session identified by the given token
    ///
    /// Fails with `SessionNotFound` when the token is unknown or the
    /// session has been deactivated.
    pub async fn get_active(&self, token: &str) -> Result<Session> {
        self.find_by_token(token, true)
            .await?
            .ok_or(RegistryError::SessionNotFound)
    }

    /// Update the session's last-touch timestamp. One commit.
    pub async fn touch(&self, session: &mut Session, timestamp: u64) -> Result<()> {
        let mut updated = session.clone();
        updated.updated = timestamp;

        let mut txn = self.store.transaction()?;
        if let Err(e) = txn.put(CF_SESSIONS, &updated.token, &updated) {
            txn.rollback();
            return Err(e.into());
        }
        txn.commit()?;

        session.updated = timestamp;
        Ok(())
    }

    /// Deactivate the session
    ///
    /// Irreversible. The active-session index row is released in the
    /// same transaction, so the user may open a new session afterwards.
    pub async fn deactivate(&self, session: &mut Session) -> Result<()> {
        let mut deactivated = session.clone();
        deactivated.active = false;

        let mut txn = self.store.transaction()?;
        match Self::stage_deactivate(txn.as_mut(), &deactivated) {
            Ok(()) => {
                txn.commit()?;
                session.active = false;
                info!("session deactivated for {}", session.username);
                Ok(())
            }
            Err(e) => {
                txn.rollback();
                Err(e.into())
            }
        }
    }

    fn stage_deactivate(
        txn: &mut (dyn StoreTransaction + '_),
        session: &Session,
    ) -> std::result::Result<(), StoreError> {
        txn.put(CF_SESSIONS, &session.token, session)?;
        txn.delete(CF_ACTIVE_SESSIONS, &session.username)
    }
}
