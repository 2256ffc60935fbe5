/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Authentication flow for the manager panel
//!
//! This module provides the login/logout interface that handles:
//! - Login against the auth endpoint with numeric account id and password
//! - The chained administrator check that gates the panel
//! - Rollback of the session cookie when the check fails
//! - Synchronous logout

use crate::config::Config;
use crate::constants::{
    FALLBACK_ERROR_CODE, MSG_LOGIN_FAILED, MSG_NOT_ADMIN, MSG_SERVER_ERROR, MSG_SUCCESS,
    USER_AGENT,
};
use crate::error::AppError;
use crate::model::http::make_http_request;
use crate::model::requests::LoginRequest;
use crate::model::response::{ManagerResponse, Role};
use crate::session::store::SessionStore;
use crate::utils::rate_limiter::RateLimiter;
use reqwest::{Client, Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Authentication manager for the admin panel
///
/// Handles login, the administrator gate, and logout. Shares the session
/// store (and therefore the cookie jar) with the admin client so a cookie
/// set here travels with every subsequent manager request.
pub struct ManagerAuth {
    config: Arc<Config>,
    client: Client,
    store: SessionStore,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl ManagerAuth {
    /// Creates a new auth handler
    ///
    /// # Arguments
    /// * `config` - Shared configuration
    /// * `store` - Session store shared with the admin client
    pub fn new(config: Arc<Config>, store: SessionStore) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(store.jar())
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));

        Ok(Self {
            config,
            client,
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

    /// Logs in and confirms the administrator role
    ///
    /// On a successful login the session cookie is written, then the
    /// chained `check_session` call confirms the account is an
    /// administrator. A non-admin account has its cookie rolled back and
    /// the login reported as failed.
    ///
    /// # Arguments
    /// * `user_id` - Numeric account id
    /// * `password` - Account password
    ///
    /// # Returns
    /// The envelope the panel shows to the operator; `data` carries the
    /// session token on success.
    pub async fn login(&self, user_id: i64, password: &str) -> ManagerResponse<String> {
        debug!("Logging in user {}", user_id);
        let request = LoginRequest::new(user_id, password);

        let response = match self.post_login(&request).await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Login request failed: {}", e);
                return ManagerResponse::failure(FALLBACK_ERROR_CODE, MSG_SERVER_ERROR);
            }
        };

        match (response.status, response.data) {
            (true, Some(session_id)) => {
                self.store.open(&session_id);

                if self.check_session().await {
                    info!("✓ Login successful, user: {}", user_id);
                    ManagerResponse {
                        status: true,
                        code: response.code,
                        message: String::from(MSG_SUCCESS),
                        data: Some(session_id),
                    }
                } else {
                    self.store.close();
                    warn!("Login rolled back: account {} is not an administrator", user_id);
                    ManagerResponse::failure(StatusCode::FORBIDDEN.as_u16(), MSG_NOT_ADMIN)
                }
            }
            _ => {
                let message = if response.message.is_empty() {
                    String::from(MSG_LOGIN_FAILED)
                } else {
                    response.message
                };
                warn!("Login rejected for user {}: {}", user_id, message);
                ManagerResponse::failure(response.code, message)
            }
        }
    }

    async fn post_login(&self, request: &LoginRequest) -> Result<ManagerResponse<String>, AppError> {
        let url = self.rest_url("/api/auth/login");
        let response = make_http_request(
            &self.client,
            self.rate_limiter.clone(),
            Method::POST,
            &url,
            None,
            &Some(request),
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Checks whether the current session is valid and belongs to an administrator
    ///
    /// # Returns
    /// `true` only when the server reports `status: true` with the `Admin`
    /// role; any transport failure or other payload reads as `false`.
    pub async fn check_session(&self) -> bool {
        let url = self.rest_url("/api/auth/check_session");

        let outcome: Result<ManagerResponse<Role>, AppError> = async {
            let response = make_http_request(
                &self.client,
                self.rate_limiter.clone(),
                Method::GET,
                &url,
                None,
                &None::<()>,
            )
            .await?;
            Ok(response.json().await?)
        }
        .await;

        match outcome {
            Ok(envelope) => {
                debug!("check_session response: {:?}", envelope);
                envelope.status && envelope.data.map(|r| r.is_admin()).unwrap_or(false)
            }
            Err(e) => {
                error!("check_session error: {}", e);
                false
            }
        }
    }

    /// Logs out: always removes the session cookie
    ///
    /// # Returns
    /// The login path the embedding UI should navigate to.
    pub fn logout(&self) -> String {
        info!("Logging out");
        self.store.close();
        self.config.session.login_path.clone()
    }

    /// The session store shared with the admin client
    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
