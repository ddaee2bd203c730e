//! Rights registry tests.

use super::helpers::*;
use crate::{RegistryError, Right, RightsRegistry};

#[tokio::test]
async fn test_grant_and_find() {
    let (store, _temp_dir) = create_test_store();
    create_test_user(&store, "alice").await;
    let registry = RightsRegistry::new(store);

    assert!(registry
        .find("alice", Right::ViewReports)
        .await
        .unwrap()
        .is_none());

    let grant = registry.grant("alice", Right::ViewReports).await.unwrap();
    assert_eq!(grant.username, "alice");
    assert_eq!(grant.right, Right::ViewReports);

    let found = registry
        .find("alice", Right::ViewReports)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, grant);

    // Other rights remain ungranted.
    assert!(registry
        .find("alice", Right::AdminUsers)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_grant_is_idempotent() {
    let (store, _temp_dir) = create_test_store();
    create_test_user(&store, "alice").await;
    let registry = RightsRegistry::new(store);

    let first = registry.grant("alice", Right::AdminRules).await.unwrap();
    let second = registry.grant("alice", Right::AdminRules).await.unwrap();

    assert_eq!(first, second);
    assert!(registry
        .find("alice", Right::AdminRules)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_grant_to_unknown_user() {
    let (store, _temp_dir) = create_test_store();
    let registry = RightsRegistry::new(store);

    let err = registry.grant("ghost", Right::AdminUsers).await.unwrap_err();
    assert!(matches!(err, RegistryError::UserNotFound(username) if username == "ghost"));
}

#[tokio::test]
async fn test_revoke_removes_the_grant() {
    let (store, _temp_dir) = create_test_store();
    create_test_user(&store, "alice").await;
    let registry = RightsRegistry::new(store);

    registry.grant("alice", Right::AdminSensors).await.unwrap();
    registry.revoke("alice", Right::AdminSensors).await.unwrap();

    assert!(registry
        .find("alice", Right::AdminSensors)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_revoke_is_a_no_op_without_a_grant() {
    let (store, _temp_dir) = create_test_store();
    create_test_user(&store, "alice").await;
    let registry = RightsRegistry::new(store);

    // Neither an absent grant nor an unknown user makes revoke fail.
    registry.revoke("alice", Right::AdminUsers).await.unwrap();
    registry.revoke("ghost", Right::AdminUsers).await.unwrap();

    registry.grant("alice", Right::AdminUsers).await.unwrap();
    registry.revoke("alice", Right::AdminUsers).await.unwrap();
    registry.revoke("alice", Right::AdminUsers).await.unwrap();

    assert!(registry
        .find("alice", Right::AdminUsers)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_validation_rejects_empty_username() {
    let (store, _temp_dir) = create_test_store();
    let registry = RightsRegistry::new(store);

    assert!(matches!(
        registry.find("", Right::AdminUsers).await.unwrap_err(),
        RegistryError::InvalidInput(_)
    ));
    assert!(matches!(
        registry.grant("", Right::AdminUsers).await.unwrap_err(),
        RegistryError::InvalidInput(_)
    ));
    assert!(matches!(
        registry.revoke("", Right::AdminUsers).await.unwrap_err(),
        RegistryError::InvalidInput(_)
    ));
}
