/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::model::response::Role;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of the login request
///
/// The server expects the numeric account id under the key `userid`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Numeric account id
    pub userid: i64,
    /// Account password
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request body
    pub fn new(userid: i64, password: impl Into<String>) -> Self {
        Self {
            userid,
            password: password.into(),
        }
    }
}

/// Body of the role-change request
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// Account whose role changes
    pub user_id: i64,
    /// Role to assign
    pub new_role: Role,
}

impl ChangeRoleRequest {
    /// Creates a role-change request body
    pub fn new(user_id: i64, new_role: Role) -> Self {
        Self { user_id, new_role }
    }
}
