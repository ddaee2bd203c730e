//! User management logic.

use crate::{
    errors::Result,
    validator::RightsValidator,
};
use std::sync::Arc;
use warden_crypto::credential_digest;
use warden_registry::{RegistryError, Right, User, UserDirectory};
use warden_storage::Store;

/// User management operations with authorization gating
pub struct UserManager<S: Store> {
    directory: UserDirectory<S>,
    validator: Arc<RightsValidator<S>>,
    password_salt: String,
}

impl<S: Store> UserManager<S> {
    pub fn new(store: Arc<S>, validator: Arc<RightsValidator<S>>, password_salt: String) -> Self {
        Self {
            directory: UserDirectory::new(store),
            validator,
            password_salt,
        }
    }

    /// Create a user on behalf of the session holder
    ///
    /// Requires the `AdminUsers` right.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        session_token: &str,
    ) -> Result<User> {
        Self::require_credentials(username, password)?;
        self.validator
            .enforce(session_token, &[Right::AdminUsers])
            .await?;

        let password_hash = self.hash(username, password);
        Ok(self.directory.create(username, &password_hash).await?)
    }

    /// Create a user without any authorization check
    ///
    /// Entry point for process-internal bootstrap callers only; it must
    /// not be reachable from end-user requests.
    pub async fn create_user_unchecked(&self, username: &str, password: &str) -> Result<User> {
        Self::require_credentials(username, password)?;

        let password_hash = self.hash(username, password);
        Ok(self.directory.create(username, &password_hash).await?)
    }

    /// Verify that a user with the given credentials exists
    ///
    /// Used by login; deliberately takes no session token.
    pub async fn user_exists(&self, username: &str, password: &str) -> Result<bool> {
        let password_hash = self.hash(username, password);
        Ok(self.directory.exists(username, &password_hash).await?)
    }

    fn require_credentials(username: &str, password: &str) -> Result<()> {
        if username.is_empty() {
            return Err(RegistryError::InvalidInput("a non-empty username is required").into());
        }
        if password.is_empty() {
            return Err(RegistryError::InvalidInput("a non-empty password is required").into());
        }
        Ok(())
    }

    fn hash(&self, username: &str, password: &str) -> String {
        credential_digest(password, username, &self.password_salt)
    }
}
