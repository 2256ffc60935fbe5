/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Manager Client
//!
//! This crate provides an async client for the manager (admin panel) REST
//! API of the IM server.
//!
//! Every admin operation resolves to the uniform [`model::response::ManagerResponse`]
//! envelope: a successful server reply is passed through unmodified, and any
//! transport or server failure is folded into an envelope with
//! `status: false` instead of an error. The only persisted client state is
//! the session cookie, written on a successful (administrator) login and
//! removed on logout or when the post-login role check fails.
//!
//! ```ignore
//! use manager_client::prelude::*;
//!
//! let client = ManagerClient::new(Config::new())?;
//! let login = client.login(1001, "secret").await;
//! if login.is_success() {
//!     let users = UserServiceImpl::new(client.config(), Arc::new(client));
//!     let list = users.list().await;
//! }
//! ```

/// Client and transport seam for the manager API
pub mod client;
/// Environment-driven configuration
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire-level request and response shapes
pub mod model;
/// Convenient re-exports of the common surface
pub mod prelude;
/// Admin services (users, online sessions)
pub mod services;
/// Session cookie state and the login/logout flow
pub mod session;
/// Shared utilities (env, logging, rate limiting)
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
