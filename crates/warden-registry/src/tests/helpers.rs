//! Test helpers shared by the registry tests.

use crate::UserDirectory;
use std::sync::Arc;
use tempfile::TempDir;
use warden_storage::RocksDbStore;

/// Open a fresh store in a temporary directory
pub fn create_test_store() -> (Arc<RocksDbStore>, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = RocksDbStore::open(temp_dir.path()).unwrap();
    (Arc::new(db), temp_dir)
}

/// Create a user record directly through the directory
pub async fn create_test_user(store: &Arc<RocksDbStore>, username: &str) {
    UserDirectory::new(Arc::clone(store))
        .create(username, "0f1e2d3c4b5a69788796a5b4c3d2e1f0")
        .await
        .unwrap();
}
