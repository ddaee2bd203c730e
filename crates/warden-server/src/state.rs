use anyhow::Result;
use std::sync::Arc;
use warden_access::{
    AccessError, RightsValidator, UserManager, UserRightManager, UserSessionManager,
};
use warden_registry::{RegistryError, Right};
use warden_storage::RocksDbStore;

use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<UserManager<RocksDbStore>>,
    pub sessions: Arc<UserSessionManager<RocksDbStore>>,
    pub rights: Arc<UserRightManager<RocksDbStore>>,
    pub validator: Arc<RightsValidator<RocksDbStore>>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self> {
        let store = Arc::new(RocksDbStore::open(&config.database_path)?);

        if config.password_salt.is_empty() {
            tracing::warn!("PASSWORD_SALT is empty; credential digests are unsalted");
        }

        let validator = Arc::new(RightsValidator::new(Arc::clone(&store)));
        let users = Arc::new(UserManager::new(
            Arc::clone(&store),
            Arc::clone(&validator),
            config.password_salt.clone(),
        ));
        let sessions = Arc::new(UserSessionManager::new(
            Arc::clone(&store),
            Arc::clone(&users),
        ));
        let rights = Arc::new(UserRightManager::new(
            Arc::clone(&store),
            Arc::clone(&validator),
        ));

        let state = AppState {
            config,
            users,
            sessions,
            rights,
            validator,
        };

        state.bootstrap_admin().await?;

        Ok(state)
    }

    /// Create the initial administrative user when configured
    ///
    /// Goes through the unchecked manager entry points; this is the one
    /// process-internal bootstrap call site in the server.
    async fn bootstrap_admin(&self) -> Result<()> {
        let Some((username, password)) = &self.config.bootstrap else {
            return Ok(());
        };

        match self.users.create_user_unchecked(username, password).await {
            Ok(_) => {
                self.rights
                    .grant_unchecked(username, Right::AdminUsers)
                    .await?;
                self.rights
                    .grant_unchecked(username, Right::AdminRights)
                    .await?;
                tracing::info!("bootstrap administrator {username} created");
            }
            Err(AccessError::Registry(RegistryError::UserExists(_))) => {
                tracing::debug!("bootstrap administrator {username} already present");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }
}
