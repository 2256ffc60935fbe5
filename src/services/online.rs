/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::client::ManagerTransport;
use crate::config::Config;
use crate::model::response::ManagerResponse;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Interface for the online-session view
#[async_trait]
pub trait OnlineService: Send + Sync {
    /// Gets the tree of online users and their sessions
    async fn tree(&self) -> ManagerResponse<Value>;

    /// Force-closes one online session
    async fn delete_session(&self, session_id: &str) -> ManagerResponse<Value>;
}

/// Implementation of the online-session service
pub struct OnlineServiceImpl<T: ManagerTransport> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: ManagerTransport> OnlineServiceImpl<T> {
    /// Creates a new instance of the online service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }
}

#[async_trait]
impl<T: ManagerTransport + 'static> OnlineService for OnlineServiceImpl<T> {
    async fn tree(&self) -> ManagerResponse<Value> {
        info!("Fetching online session tree");
        self.client
            .dispatch::<(), Value>(Method::GET, "/api/manager/online/tree", None, None)
            .await
    }

    async fn delete_session(&self, session_id: &str) -> ManagerResponse<Value> {
        info!("Deleting online session {}", session_id);
        let query = [("session_id", session_id.to_string())];
        self.client
            .dispatch::<(), Value>(
                Method::DELETE,
                "/api/manager/online/session",
                Some(&query),
                None,
            )
            .await
    }
}
