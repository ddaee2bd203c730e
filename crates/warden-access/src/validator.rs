//! Rights enforcement engine.

use crate::errors::{AccessError, Result};
use std::sync::Arc;
use warden_registry::{Right, RightsRegistry, SessionRegistry};
use warden_storage::Store;

/// Answers whether the owner of an active session holds a set of rights
pub struct RightsValidator<S: Store> {
    sessions: SessionRegistry<S>,
    rights: RightsRegistry<S>,
}

impl<S: Store> RightsValidator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            sessions: SessionRegistry::new(Arc::clone(&store)),
            rights: RightsRegistry::new(store),
        }
    }

    /// Determine whether a user holds a right
    pub async fn has_right(&self, username: &str, right: Right) -> Result<bool> {
        Ok(self.rights.find(username, right).await?.is_some())
    }

    /// Fail unless the owner of the session identified by the token
    /// holds every required right
    ///
    /// The token must resolve to an active session (`SessionNotFound`
    /// otherwise). Rights are checked in the given order and the first
    /// missing one short-circuits; the error does not say which check
    /// failed.
    pub async fn enforce(&self, session_token: &str, required: &[Right]) -> Result<()> {
        let session = self.sessions.get_active(session_token).await?;

        for right in required {
            if !self.has_right(&session.username, *right).await? {
                return Err(AccessError::InsufficientRights);
            }
        }

        Ok(())
    }
}
