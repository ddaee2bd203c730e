//! Session management logic: login and logout.

use crate::{
    errors::{AccessError, Result},
    users::UserManager,
};
use std::sync::Arc;
use tracing::debug;
use warden_crypto::current_timestamp;
use warden_registry::{RegistryError, SessionRegistry};
use warden_storage::Store;

/// Login and logout orchestration
///
/// Login is idempotent per active session: while a session stays active,
/// repeated logins return its token and refresh its touch timestamp.
pub struct UserSessionManager<S: Store> {
    registry: SessionRegistry<S>,
    users: Arc<UserManager<S>>,
}

impl<S: Store> UserSessionManager<S> {
    pub fn new(store: Arc<S>, users: Arc<UserManager<S>>) -> Self {
        Self {
            registry: SessionRegistry::new(store),
            users,
        }
    }

    /// Log a user in, reusing the active session or creating one
    ///
    /// Returns the session token. Anyone presenting valid credentials
    /// may log in; no authorization gate applies here.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        if !self.users.user_exists(username, password).await? {
            return Err(AccessError::InvalidCredentials);
        }

        loop {
            if let Some(mut session) = self.registry.find_active_for_user(username).await? {
                self.registry
                    .touch(&mut session, current_timestamp())
                    .await?;
                return Ok(session.token);
            }

            match self.registry.create(username).await {
                Ok(session) => return Ok(session.token),
                Err(RegistryError::ActiveSessionExists(_)) => {
                    // A concurrent login won the create race; loop back
                    // and reuse the surviving session.
                    debug!("concurrent login for {username}, reusing surviving session");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Log a user out by deactivating the session
    ///
    /// Not idempotent, unlike grant and revoke: only active sessions
    /// resolve, so a second logout of the same token fails with
    /// `SessionNotFound`.
    pub async fn logout(&self, session_token: &str) -> Result<()> {
        let mut session = self.registry.get_active(session_token).await?;
        self.registry.deactivate(&mut session).await?;
        Ok(())
    }
}
