/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! The uniform response envelope of the manager API
//!
//! Every admin operation resolves to a `ManagerResponse`, whether the server
//! produced it or the client synthesized one after a failure. Callers never
//! see an `Err`; a failed call is an envelope with `status: false`.

use crate::constants::{FALLBACK_ERROR_CODE, MSG_NETWORK_ERROR};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform envelope returned by every manager API endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerResponse<T> {
    /// Whether the operation succeeded
    pub status: bool,
    /// Server-reported code, or the HTTP status / 500 when synthesized
    pub code: u16,
    /// Human-readable message; never empty on synthesized envelopes
    pub message: String,
    /// Payload, absent on failures
    pub data: Option<T>,
}

impl<T> ManagerResponse<T> {
    /// Builds a failure envelope with no payload
    ///
    /// # Arguments
    /// * `code` - Code to report (HTTP status or 500)
    /// * `message` - Failure message; replaced by a generic network-error
    ///   message when empty so the envelope never carries a blank message
    #[must_use]
    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            String::from(MSG_NETWORK_ERROR)
        } else {
            message
        };
        Self {
            status: false,
            code,
            message,
            data: None,
        }
    }

    /// Folds an internal error into the envelope shape
    ///
    /// The code is the server-reported HTTP status when one is known and 500
    /// otherwise. For rejections carrying a body, the body's own `message`
    /// field wins when it parses as JSON.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        let code = err
            .status()
            .map(|s| s.as_u16())
            .unwrap_or(FALLBACK_ERROR_CODE);

        let message = match err {
            AppError::Rejected { body, .. } => server_message(body).unwrap_or_else(|| err.to_string()),
            _ => err.to_string(),
        };

        Self::failure(code, message)
    }

    /// Whether the envelope reports success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status
    }
}

/// Extracts the `message` field from a raw response body, if the body is a
/// JSON object carrying a non-empty one
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?;
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// Account role reported by `check_session` and sent by `change_role`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Administrator account; the only role allowed into the panel
    Admin,
    /// Regular account
    User,
}

impl Role {
    /// Whether this role may use the manager endpoints
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::User => write!(f, "User"),
        }
    }
}
