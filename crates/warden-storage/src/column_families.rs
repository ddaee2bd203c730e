//! RocksDB column family definitions.

/// User records: username → User
pub const CF_USERS: &str = "users";

/// Session records: token → Session
pub const CF_SESSIONS: &str = "sessions";

/// Active session index: username → token
///
/// Holds at most one row per username. Inserting through the uniqueness
/// check on this family is what enforces the single-active-session
/// invariant at the store level.
pub const CF_ACTIVE_SESSIONS: &str = "active_sessions";

/// Right grants: (username, right) → RightGrant
pub const CF_USER_RIGHTS: &str = "user_rights";

/// Get all column family names
pub fn all_column_families() -> Vec<&'static str> {
    vec![CF_USERS, CF_SESSIONS, CF_ACTIVE_SESSIONS, CF_USER_RIGHTS]
}
