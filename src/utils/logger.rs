/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Logging setup for the manager API client
//!
//! Uses `tracing-subscriber` with the level taken from the `LOGLEVEL`
//! environment variable (ERROR, WARN, INFO, DEBUG or TRACE, default INFO).

use once_cell::sync::OnceCell;
use std::env;
use tracing::{Level, info};

static LOGGER: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber
///
/// Safe to call from multiple places: only the first call installs the
/// subscriber, subsequent calls are no-ops.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let level = match env::var("LOGLEVEL")
            .unwrap_or_else(|_| String::from("INFO"))
            .to_uppercase()
            .as_str()
        {
            "ERROR" => Level::ERROR,
            "WARN" => Level::WARN,
            "DEBUG" => Level::DEBUG,
            "TRACE" => Level::TRACE,
            _ => Level::INFO,
        };

        // try_init: another subscriber may already be installed by the host
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init();

        info!("Logger initialized at {} level", level);
    });
}
