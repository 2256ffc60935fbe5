/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::client::ManagerTransport;
use crate::config::Config;
use crate::model::requests::ChangeRoleRequest;
use crate::model::response::{ManagerResponse, Role};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Interface for user administration
///
/// Payloads are passed through untouched as `serde_json::Value`: the panel
/// renders whatever the server sends.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists all registered users
    async fn list(&self) -> ManagerResponse<Value>;

    /// Gets the detail record of one user
    async fn detail(&self, user_id: i64) -> ManagerResponse<Value>;

    /// Gets the friend list of one user
    ///
    /// The backend serves the friend list from the detail endpoint.
    async fn friends(&self, user_id: i64) -> ManagerResponse<Value>;

    /// Deletes a user account
    async fn delete(&self, user_id: i64) -> ManagerResponse<Value>;

    /// Assigns a new role to a user
    async fn change_role(&self, user_id: i64, new_role: Role) -> ManagerResponse<Value>;
}

/// Implementation of the user administration service
pub struct UserServiceImpl<T: ManagerTransport> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: ManagerTransport> UserServiceImpl<T> {
    /// Creates a new instance of the user service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Sets a new configuration
    pub fn set_config(&mut self, config: Arc<Config>) {
        self.config = config;
    }
}

#[async_trait]
impl<T: ManagerTransport + 'static> UserService for UserServiceImpl<T> {
    async fn list(&self) -> ManagerResponse<Value> {
        info!("Fetching registered user list");
        self.client
            .dispatch::<(), Value>(Method::GET, "/api/manager/user/list", None, None)
            .await
    }

    async fn detail(&self, user_id: i64) -> ManagerResponse<Value> {
        debug!("Fetching detail for user {}", user_id);
        let query = [("user_id", user_id.to_string())];
        self.client
            .dispatch::<(), Value>(Method::GET, "/api/manager/user/detail", Some(&query), None)
            .await
    }

    async fn friends(&self, user_id: i64) -> ManagerResponse<Value> {
        debug!("Fetching friend list for user {}", user_id);
        let query = [("user_id", user_id.to_string())];
        self.client
            .dispatch::<(), Value>(Method::GET, "/api/manager/user/detail", Some(&query), None)
            .await
    }

    async fn delete(&self, user_id: i64) -> ManagerResponse<Value> {
        info!("Deleting user {}", user_id);
        let query = [("user_id", user_id.to_string())];
        self.client
            .dispatch::<(), Value>(Method::DELETE, "/api/manager/user", Some(&query), None)
            .await
    }

    async fn change_role(&self, user_id: i64, new_role: Role) -> ManagerResponse<Value> {
        info!("Changing role of user {} to {}", user_id, new_role);
        let body = ChangeRoleRequest::new(user_id, new_role);
        self.client
            .dispatch::<ChangeRoleRequest, Value>(
                Method::POST,
                "/api/manager/user/role",
                None,
                Some(body),
            )
            .await
    }
}
