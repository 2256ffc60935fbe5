/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Client for the manager (admin panel) REST API
//!
//! This module provides the client that handles:
//! - The shared cookie jar that carries the session token
//! - Rate limiting for all API requests
//! - Normalization of every failure into the `ManagerResponse` envelope
//!
//! # Example
//! ```ignore
//! use manager_client::client::ManagerClient;
//! use manager_client::config::Config;
//!
//! let client = ManagerClient::new(Config::new())?;
//! let login = client.login(1001, "secret").await;
//! assert!(login.is_success());
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::make_http_request;
use crate::model::response::ManagerResponse;
use crate::session::auth::ManagerAuth;
use crate::session::store::{ManagerSession, SessionStore};
use crate::utils::rate_limiter::RateLimiter;
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::warn;

/// Transport seam the services are generic over
///
/// `dispatch` never fails: any transport or server error is folded into a
/// `ManagerResponse` with `status: false`. Implement this trait with a stub
/// to unit-test services without a server.
#[async_trait]
pub trait ManagerTransport: Send + Sync {
    /// Issues one request and normalizes the outcome into the envelope
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the configured base URL
    /// * `query` - Optional query pairs
    /// * `body` - Optional JSON body
    async fn dispatch<B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<B>,
    ) -> ManagerResponse<T>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send;
}

/// Client for the manager API with cookie-based session handling
///
/// Owns the HTTP client (cookie provider = the session store's jar, so the
/// session cookie set at login travels with every request), the rate
/// limiter, and the auth flow.
pub struct ManagerClient {
    auth: Arc<ManagerAuth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
    store: SessionStore,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl ManagerClient {
    /// Creates a new client
    ///
    /// No request is issued: authentication happens when `login` is called
    /// with the operator's credentials.
    ///
    /// # Arguments
    /// * `config` - Configuration with base URL, timeouts and cookie settings
    ///
    /// # Returns
    /// * `Ok(ManagerClient)` - Client ready to use
    /// * `Err(AppError)` - If the base URL is invalid or the HTTP client
    ///   cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let store = SessionStore::new(&config)?;

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(store.jar())
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));
        let auth = Arc::new(ManagerAuth::new(config.clone(), store.clone())?);

        Ok(Self {
            auth,
            http_client,
            config,
            store,
            rate_limiter,
        })
    }

    /// Joins the configured base URL with an endpoint path
    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issues one request and parses the envelope, surfacing errors
    ///
    /// This is the fallible primitive under `dispatch`; the services go
    /// through `dispatch` so their callers only ever see envelopes.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<B>,
    ) -> Result<ManagerResponse<T>, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let url = self.rest_url(path);
        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            &url,
            query,
            &body,
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Logs in and confirms the administrator role
    pub async fn login(&self, user_id: i64, password: &str) -> ManagerResponse<String> {
        self.auth.login(user_id, password).await
    }

    /// Checks whether the current session belongs to an administrator
    pub async fn check_session(&self) -> bool {
        self.auth.check_session().await
    }

    /// Logs out and returns the login path to navigate to
    pub fn logout(&self) -> String {
        self.auth.logout()
    }

    /// Current session snapshot, if an unexpired one is held
    #[must_use]
    pub fn session(&self) -> Option<ManagerSession> {
        self.store.session()
    }

    /// Whether an unexpired session is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Gets a reference to the auth handler
    #[must_use]
    pub fn auth(&self) -> &ManagerAuth {
        &self.auth
    }

    /// Gets the current configuration
    #[must_use]
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }
}

#[async_trait]
impl ManagerTransport for ManagerClient {
    async fn dispatch<B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<B>,
    ) -> ManagerResponse<T>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        match self.request(method, path, query, body).await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Request to {} failed: {}", path, e);
                ManagerResponse::from_app_error(&e)
            }
        }
    }
}
