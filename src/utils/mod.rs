/// Environment variable helpers used by the configuration layer
pub mod env;
/// Logger initialization utilities
pub mod logger;
/// Token-bucket rate limiter for outgoing API requests
pub mod rate_limiter;
