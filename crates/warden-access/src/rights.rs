//! Right grant management logic.

use crate::{errors::Result, validator::RightsValidator};
use std::sync::Arc;
use warden_registry::{Right, RightGrant, RightsRegistry};
use warden_storage::Store;

/// Grant and revoke orchestration with authorization gating
pub struct UserRightManager<S: Store> {
    registry: RightsRegistry<S>,
    validator: Arc<RightsValidator<S>>,
}

impl<S: Store> UserRightManager<S> {
    pub fn new(store: Arc<S>, validator: Arc<RightsValidator<S>>) -> Self {
        Self {
            registry: RightsRegistry::new(store),
            validator,
        }
    }

    /// Grant a right on behalf of the session holder
    ///
    /// Requires the `AdminRights` right.
    pub async fn grant(
        &self,
        username: &str,
        right: Right,
        session_token: &str,
    ) -> Result<RightGrant> {
        self.validator
            .enforce(session_token, &[Right::AdminRights])
            .await?;
        self.grant_unchecked(username, right).await
    }

    /// Grant a right without any authorization check
    ///
    /// Entry point for process-internal bootstrap callers only.
    pub async fn grant_unchecked(&self, username: &str, right: Right) -> Result<RightGrant> {
        Ok(self.registry.grant(username, right).await?)
    }

    /// Revoke a right on behalf of the session holder
    ///
    /// Requires the `AdminRights` right.
    pub async fn revoke(&self, username: &str, right: Right, session_token: &str) -> Result<()> {
        self.validator
            .enforce(session_token, &[Right::AdminRights])
            .await?;
        self.revoke_unchecked(username, right).await
    }

    /// Revoke a right without any authorization check
    ///
    /// Entry point for process-internal bootstrap callers only.
    pub async fn revoke_unchecked(&self, username: &str, right: Right) -> Result<()> {
        Ok(self.registry.revoke(username, right).await?)
    }
}
