//! The closed set of console roles.
//!
//! Roles form a flat allow-list (not a hierarchy): each route declares which
//! roles may enter, and membership is the only check. Unrecognized role
//! strings (from storage tampering or a misbehaving backend) collapse to
//! [`Role::Guest`] rather than failing, so a corrupted value can never grant
//! more access than an anonymous session.

use serde::{Deserialize, Serialize};

/// Console role attached to a session and to route allow-lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular authenticated user.
    User,
    /// Administrator.
    Admin,
    /// Anonymous / unrecognized. Absorbs unknown values on deserialize.
    #[default]
    #[serde(other)]
    Guest,
}

impl Role {
    /// Parse a stored role string, treating anything unrecognized as guest.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "user" => Self::User,
            _ => Self::Guest,
        }
    }

    /// The wire/storage spelling of this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;
