//! User administration endpoints.

use serde::{Deserialize, Serialize};

use crate::error::GateError;
use crate::gate::RequestGate;
use crate::role::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Managed console account. The `role` here is resource data, distinct from
/// the session's own role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// Creation payload (id is server-assigned).
#[derive(Clone, Debug, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// Partial update; absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// # Errors
/// Classified by the gate.
pub async fn list(gate: &RequestGate) -> Result<Vec<User>, GateError> {
    gate.get("/users").await
}

/// # Errors
/// Classified by the gate.
pub async fn get(gate: &RequestGate, id: u64) -> Result<User, GateError> {
    gate.get(&format!("/users/{id}")).await
}

/// # Errors
/// Classified by the gate.
pub async fn create(gate: &RequestGate, user: &NewUser) -> Result<User, GateError> {
    gate.post("/users", user).await
}

/// # Errors
/// Classified by the gate.
pub async fn update(gate: &RequestGate, id: u64, patch: &UserPatch) -> Result<User, GateError> {
    gate.patch(&format!("/users/{id}"), patch).await
}

/// # Errors
/// Classified by the gate.
pub async fn delete(gate: &RequestGate, id: u64) -> Result<(), GateError> {
    gate.delete(&format!("/users/{id}")).await
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
