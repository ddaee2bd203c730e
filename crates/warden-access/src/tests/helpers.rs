//! Test helpers wiring the full access stack over a fresh store.

use crate::{RightsValidator, UserManager, UserRightManager, UserSessionManager};
use std::sync::Arc;
use tempfile::TempDir;
use warden_storage::RocksDbStore;

pub struct TestAccess {
    pub users: Arc<UserManager<RocksDbStore>>,
    pub sessions: UserSessionManager<RocksDbStore>,
    pub rights: UserRightManager<RocksDbStore>,
    pub validator: Arc<RightsValidator<RocksDbStore>>,
    _temp_dir: TempDir,
}

/// Build the managers the way the server wires them, over a temporary
/// database
pub fn create_test_access() -> TestAccess {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RocksDbStore::open(temp_dir.path()).unwrap());

    let validator = Arc::new(RightsValidator::new(Arc::clone(&store)));
    let users = Arc::new(UserManager::new(
        Arc::clone(&store),
        Arc::clone(&validator),
        "test-salt".to_string(),
    ));
    let sessions = UserSessionManager::new(Arc::clone(&store), Arc::clone(&users));
    let rights = UserRightManager::new(Arc::clone(&store), Arc::clone(&validator));

    TestAccess {
        users,
        sessions,
        rights,
        validator,
        _temp_dir: temp_dir,
    }
}
