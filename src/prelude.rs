/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Manager Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits of the library.
//!
//! ## Usage
//!
//! ```rust
//! use manager_client::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the manager API client
pub use crate::config::{Config, RateLimiterConfig, RestApiConfig, SessionConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// Client for the manager API
pub use crate::client::ManagerClient;

/// Transport trait the services are generic over
pub use crate::client::ManagerTransport;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Login/logout flow with the administrator gate
pub use crate::session::auth::ManagerAuth;

/// Cookie-backed session state
pub use crate::session::store::{ManagerSession, SessionStore};

// ============================================================================
// SERVICES
// ============================================================================

/// User administration service
pub use crate::services::users::{UserService, UserServiceImpl};

/// Online-session service
pub use crate::services::online::{OnlineService, OnlineServiceImpl};

// ============================================================================
// MODELS
// ============================================================================

/// The uniform response envelope and the account role
pub use crate::model::response::{ManagerResponse, Role};

/// Request body types
pub use crate::model::requests::{ChangeRoleRequest, LoginRequest};

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting utilities
pub use crate::utils::rate_limiter::RateLimiter;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for HTTP operations
pub use reqwest::Method;
