/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Error types for the manager API client
//!
//! `AppError` is internal plumbing: the admin operations never surface it.
//! Every error is folded into a `ManagerResponse` envelope with
//! `status: false` before it reaches the caller.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (connection refused, timeout, bad body, ...)
    Http(reqwest::Error),
    /// Server answered 401
    Unauthorized,
    /// Server answered 404
    NotFound,
    /// Server answered 429
    RateLimitExceeded,
    /// Server answered with any other non-2xx status; the body text is kept
    /// so the server-reported message can be folded into the envelope
    Rejected {
        /// HTTP status reported by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Caller-side input could not be used to build a request
    InvalidInput(String),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// IO failure
    Io(std::io::Error),
}

impl AppError {
    /// Returns the HTTP status this error maps to, when one is known
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::RateLimitExceeded => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(e) => write!(f, "http error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Rejected { status, .. } => {
                write!(f, "request rejected with status {status}")
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Http(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
