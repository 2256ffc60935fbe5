/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Configuration for the manager API client
//!
//! Everything is environment-driven with sensible defaults, loaded through
//! `.env` when present. Login credentials are deliberately NOT part of the
//! configuration: the admin panel collects them interactively and passes them
//! to `login` per call.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_REST_TIMEOUT, LOGIN_PATH, SESSION_COOKIE,
    SESSION_COOKIE_TTL_SECS,
};
use crate::utils::env::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the manager API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Session cookie configuration
    pub session: SessionConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the manager API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the client-held session cookie
pub struct SessionConfig {
    /// Name of the session cookie
    pub cookie_name: String,
    /// Cookie lifetime in seconds
    pub ttl_secs: i64,
    /// Path the embedding UI navigates to after logout
    pub login_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from environment variables
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "MANAGER_REST_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("MANAGER_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "MANAGER_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "MANAGER_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "MANAGER_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            session: SessionConfig {
                cookie_name: get_env_or_default(
                    "MANAGER_SESSION_COOKIE",
                    String::from(SESSION_COOKIE),
                ),
                ttl_secs: get_env_or_default("MANAGER_SESSION_TTL_SECS", SESSION_COOKIE_TTL_SECS),
                login_path: get_env_or_default("MANAGER_LOGIN_PATH", String::from(LOGIN_PATH)),
            },
        }
    }

    /// Creates a configuration pointing at an explicit base URL
    ///
    /// Everything else keeps its environment-driven value. Handy for tests
    /// talking to a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.rest_api.base_url = base_url.into();
        config
    }
}
