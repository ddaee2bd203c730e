//! Entity definitions for the identity store.
//!
//! All three entities are plain data holders. Sessions and right grants
//! reference their owner by username only; the store, not an in-memory
//! object graph, is the source of truth between calls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User record
///
/// The username doubles as the storage key and is immutable once
/// created. There is no password-change operation; the record is never
/// updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Opaque credential digest, never the plain password
    pub password_hash: String,
}

/// Session record tracking one bearer credential
///
/// A session moves from active to inactive exactly once and is never
/// physically deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque unique bearer token, generated at creation and never reused
    pub token: String,
    pub username: String,
    pub active: bool,
    /// Unix seconds at creation
    pub created: u64,
    /// Unix seconds at the last touch
    pub updated: u64,
}

/// A single (user, right) capability assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightGrant {
    pub username: String,
    pub right: Right,
}

/// Closed enumeration of grantable rights
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Right {
    AdminUsers = 0x01,
    AdminRights = 0x02,
    AdminSensors = 0x03,
    AdminRules = 0x04,
    ViewReports = 0x05,
}

impl Right {
    /// The wire name of the right
    pub fn as_str(&self) -> &'static str {
        match self {
            Right::AdminUsers => "AdminUsers",
            Right::AdminRights => "AdminRights",
            Right::AdminSensors => "AdminSensors",
            Right::AdminRules => "AdminRules",
            Right::ViewReports => "ViewReports",
        }
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized right name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRight(pub String);

impl fmt::Display for UnknownRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown right name: {}", self.0)
    }
}

impl std::error::Error for UnknownRight {}

impl FromStr for Right {
    type Err = UnknownRight;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "AdminUsers" => Ok(Right::AdminUsers),
            "AdminRights" => Ok(Right::AdminRights),
            "AdminSensors" => Ok(Right::AdminSensors),
            "AdminRules" => Ok(Right::AdminRules),
            "ViewReports" => Ok(Right::ViewReports),
            other => Err(UnknownRight(other.to_string())),
        }
    }
}
