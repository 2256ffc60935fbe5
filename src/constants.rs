/// User agent string used in HTTP requests to identify this client to the manager API
pub const USER_AGENT: &str = "manager-client/0.2.1";
/// Default base URL for the manager API when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Name of the cookie holding the session token
pub const SESSION_COOKIE: &str = "session_id";
/// Lifetime of the session cookie in seconds (one day)
pub const SESSION_COOKIE_TTL_SECS: i64 = 86_400;
/// Path the embedding UI should navigate to after logout
pub const LOGIN_PATH: &str = "/login";
/// Default maximum number of requests allowed per rate-limit period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 30;
/// Default rate-limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default burst size for the rate limiter
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// Code used for envelopes synthesized without a server-reported status
pub const FALLBACK_ERROR_CODE: u16 = 500;

/// Message carried by a successful login envelope
pub const MSG_SUCCESS: &str = "success";
/// Message returned when the logged-in account is not an administrator
pub const MSG_NOT_ADMIN: &str = "非管理员身份";
/// Message returned when the server rejects a login without its own message
pub const MSG_LOGIN_FAILED: &str = "登录失败";
/// Generic message for transport-level failures
pub const MSG_NETWORK_ERROR: &str = "网络错误";
/// Message returned when the login request itself fails to reach the server
pub const MSG_SERVER_ERROR: &str = "网络错误或服务器异常";
