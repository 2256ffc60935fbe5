/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Cookie-backed session state
//!
//! The session cookie is the only piece of persisted client state. The store
//! wraps the cookie jar shared with the HTTP clients, plus an in-memory
//! snapshot of the current session so callers can inspect it without going
//! through the jar. All operations are synchronous so `logout` can stay a
//! plain function, as the panel expects.

use crate::config::Config;
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Snapshot of the current authenticated session
#[derive(Debug, Clone)]
pub struct ManagerSession {
    /// Opaque session token, mirrored into the cookie
    pub session_id: String,
    /// When the session was opened
    pub created_at: DateTime<Utc>,
    /// When the cookie expires (one day after creation by default)
    pub expires_at: DateTime<Utc>,
}

impl ManagerSession {
    /// Checks if the session is expired or will expire soon
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 0)
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<i64>) -> bool {
        let margin = Duration::seconds(margin_seconds.unwrap_or(0));
        self.expires_at - margin <= Utc::now()
    }

    /// Seconds until the session expires; negative once it has
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }
}

/// Holder of the session cookie and its in-memory snapshot
///
/// Cheap to clone: all state is shared behind `Arc`.
#[derive(Clone)]
pub struct SessionStore {
    jar: Arc<Jar>,
    state: Arc<RwLock<Option<ManagerSession>>>,
    base_url: Url,
    cookie_name: String,
    ttl_secs: i64,
}

impl SessionStore {
    /// Creates a store for the configured API origin
    ///
    /// # Returns
    /// * `Ok(SessionStore)` - Store bound to the configured base URL
    /// * `Err(AppError)` - If the base URL does not parse
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.rest_api.base_url)
            .map_err(|e| AppError::InvalidInput(format!("invalid base url: {e}")))?;

        Ok(Self {
            jar: Arc::new(Jar::default()),
            state: Arc::new(RwLock::new(None)),
            base_url,
            cookie_name: config.session.cookie_name.clone(),
            ttl_secs: config.session.ttl_secs,
        })
    }

    /// The cookie jar to install as the HTTP client's cookie provider
    #[must_use]
    pub fn jar(&self) -> Arc<Jar> {
        self.jar.clone()
    }

    /// Opens a session: writes the cookie and records the snapshot
    ///
    /// # Arguments
    /// * `session_id` - Token returned by the login endpoint
    pub fn open(&self, session_id: &str) {
        let cookie = format!(
            "{}={}; Max-Age={}; Path=/",
            self.cookie_name, session_id, self.ttl_secs
        );
        self.jar.add_cookie_str(&cookie, &self.base_url);

        let now = Utc::now();
        let session = ManagerSession {
            session_id: session_id.to_string(),
            created_at: now,
            expires_at: now + Duration::seconds(self.ttl_secs),
        };

        if let Ok(mut state) = self.state.write() {
            *state = Some(session);
        }
        debug!("Session cookie set ({} seconds)", self.ttl_secs);
    }

    /// Closes the session: clears the snapshot and expires the cookie
    pub fn close(&self) {
        let cookie = format!("{}=; Max-Age=0; Path=/", self.cookie_name);
        self.jar.add_cookie_str(&cookie, &self.base_url);

        if let Ok(mut state) = self.state.write() {
            *state = None;
        }
        debug!("Session cookie removed");
    }

    /// Current session snapshot; an expired one reads as absent
    #[must_use]
    pub fn session(&self) -> Option<ManagerSession> {
        match self.state.read() {
            Ok(state) => state
                .as_ref()
                .filter(|s| !s.is_expired(None))
                .cloned(),
            Err(_) => None,
        }
    }

    /// Current session token, if any
    #[must_use]
    pub fn session_id(&self) -> Option<String> {
        self.session().map(|s| s.session_id)
    }

    /// Whether an unexpired session is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Raw `Cookie` header the jar would send to the API origin
    ///
    /// Mostly useful in tests and diagnostics.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|v| v.to_str().map(String::from).ok())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("base_url", &self.base_url.as_str())
            .field("cookie_name", &self.cookie_name)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
