//! Form field validators.
//!
//! Validators return `Result<(), String>` where the error carries the
//! user-facing message, instead of driving callbacks. The remote variant
//! goes through the gate like any other call.

use crate::error::GateError;
use crate::gate::RequestGate;

/// Validate an email address.
///
/// # Errors
///
/// A user-facing message when the value is empty or malformed.
pub fn validate_email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("email address is required".to_owned());
    }
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let well_formed = parts.next().is_none()
        && !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace);
    if well_formed {
        Ok(())
    } else {
        Err("please enter a valid email address".to_owned())
    }
}

/// Validate a mobile phone number (11 digits, `1[3-9]` prefix).
///
/// # Errors
///
/// A user-facing message when the value is empty or malformed.
pub fn validate_phone(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("phone number is required".to_owned());
    }
    let mut chars = value.chars();
    let well_formed = value.len() == 11
        && chars.next() == Some('1')
        && chars.next().is_some_and(|c| ('3'..='9').contains(&c))
        && value.chars().all(|c| c.is_ascii_digit());
    if well_formed {
        Ok(())
    } else {
        Err("please enter a valid phone number".to_owned())
    }
}

/// Remote probe: reject usernames already taken.
///
/// Connectivity problems are reported as a validation message too, so an
/// unreachable uniqueness probe never propagates as a hard error.
///
/// # Errors
///
/// A user-facing message when the name is taken or the probe failed.
pub async fn validate_username_available(gate: &RequestGate, username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("username is required".to_owned());
    }
    let matches: Vec<serde_json::Value> = gate
        .get(&format!("/users?name={username}"))
        .await
        .map_err(|err: GateError| err.to_string())?;
    if matches.is_empty() {
        Ok(())
    } else {
        Err("username is already taken".to_owned())
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
