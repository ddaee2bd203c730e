//! Credential and session lifecycle tests.

use super::helpers::*;
use crate::AccessError;
use warden_registry::RegistryError;

#[tokio::test]
async fn test_created_user_can_be_verified() {
    let access = create_test_access();

    access
        .users
        .create_user_unchecked("alice", "pw1")
        .await
        .unwrap();

    assert!(access.users.user_exists("alice", "pw1").await.unwrap());
    assert!(!access.users.user_exists("alice", "wrong").await.unwrap());
    assert!(!access.users.user_exists("bob", "pw1").await.unwrap());
}

#[tokio::test]
async fn test_create_user_rejects_empty_credentials() {
    let access = create_test_access();

    let err = access
        .users
        .create_user_unchecked("", "pw1")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AccessError::Registry(RegistryError::InvalidInput(_))
    ));

    let err = access
        .users
        .create_user_unchecked("alice", "")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AccessError::Registry(RegistryError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_duplicate_user_is_a_conflict() {
    let access = create_test_access();

    access
        .users
        .create_user_unchecked("alice", "pw1")
        .await
        .unwrap();

    let err = access
        .users
        .create_user_unchecked("alice", "pw2")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AccessError::Registry(RegistryError::UserExists(_))
    ));

    // The first registration still holds.
    assert!(access.users.user_exists("alice", "pw1").await.unwrap());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let access = create_test_access();

    access
        .users
        .create_user_unchecked("alice", "pw1")
        .await
        .unwrap();

    let err = access.sessions.login("alice", "wrong").await.unwrap_err();
    assert!(matches!(err, AccessError::InvalidCredentials));

    let err = access.sessions.login("nobody", "pw1").await.unwrap_err();
    assert!(matches!(err, AccessError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_reuses_the_active_session() {
    let access = create_test_access();

    access
        .users
        .create_user_unchecked("alice", "pw1")
        .await
        .unwrap();

    let first = access.sessions.login("alice", "pw1").await.unwrap();
    let second = access.sessions.login("alice", "pw1").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_login_after_logout_returns_a_fresh_token() {
    let access = create_test_access();

    access
        .users
        .create_user_unchecked("alice", "pw1")
        .await
        .unwrap();

    let first = access.sessions.login("alice", "pw1").await.unwrap();
    access.sessions.logout(&first).await.unwrap();

    let second = access.sessions.login("alice", "pw1").await.unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_logout_is_not_idempotent() {
    let access = create_test_access();

    access
        .users
        .create_user_unchecked("alice", "pw1")
        .await
        .unwrap();

    let token = access.sessions.login("alice", "pw1").await.unwrap();
    access.sessions.logout(&token).await.unwrap();

    // Unlike grant and revoke, a second logout of the same token fails:
    // the deactivated session no longer resolves.
    let err = access.sessions.logout(&token).await.unwrap_err();
    assert!(matches!(
        err,
        AccessError::Registry(RegistryError::SessionNotFound)
    ));
}

#[tokio::test]
async fn test_logout_of_unknown_token_fails() {
    let access = create_test_access();

    let err = access.sessions.logout("no-such-token").await.unwrap_err();
    assert!(matches!(
        err,
        AccessError::Registry(RegistryError::SessionNotFound)
    ));
}
