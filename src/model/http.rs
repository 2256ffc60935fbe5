/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Centralized HTTP request primitive
//!
//! Both the admin client and the auth flow funnel their requests through
//! `make_http_request`: one place that waits on the rate limiter, attaches
//! the JSON headers, and maps non-2xx statuses onto `AppError`. Nothing is
//! retried; a failure is reported to the caller as-is.

use crate::error::AppError;
use crate::utils::rate_limiter::RateLimiter;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Makes a single HTTP request with rate limiting
///
/// # Arguments
///
/// * `client` - The HTTP client to use (carries the session cookie jar)
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method (GET, POST, DELETE, ...)
/// * `url` - Full URL to request
/// * `query` - Optional query pairs appended to the URL
/// * `body` - Optional request body (serialized to JSON)
///
/// # Returns
///
/// * `Ok(Response)` - Any 2xx response
/// * `Err(AppError)` - Transport failure, or a non-2xx status mapped to
///   `Unauthorized` / `NotFound` / `RateLimitExceeded` / `Rejected`
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    query: Option<&[(&str, String)]>,
    body: &Option<B>,
) -> Result<Response, AppError> {
    {
        let limiter = rate_limiter.read().await;
        limiter.wait().await;
    }

    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Content-Type", "application/json; charset=UTF-8")
        .header("Accept", "application/json; charset=UTF-8");

    if let Some(pairs) = query {
        request = request.query(pairs);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => {
            let body_text = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body_text);
            Err(AppError::Unauthorized)
        }
        StatusCode::NOT_FOUND => {
            let body_text = response.text().await.unwrap_or_default();
            error!("Not found: {}", body_text);
            Err(AppError::NotFound)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let body_text = response.text().await.unwrap_or_default();
            error!("Rate limit exceeded: {}", body_text);
            Err(AppError::RateLimitExceeded)
        }
        _ => {
            let body_text = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body_text);
            Err(AppError::Rejected {
                status,
                body: body_text,
            })
        }
    }
}
