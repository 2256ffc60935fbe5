// Common utilities for integration tests

use manager_client::prelude::*;

/// Creates a client pointed at a mock server
pub fn create_test_client(base_url: &str) -> ManagerClient {
    setup_logger();
    let config = Config::with_base_url(base_url);
    ManagerClient::new(config).expect("Failed to create client")
}

/// Envelope body for a successful login handing out `session_id`
pub fn login_ok_body(session_id: &str) -> String {
    format!(
        r#"{{"status":true,"code":200,"message":"ok","data":"{session_id}"}}"#
    )
}

/// Envelope body for a `check_session` reply with the given role
pub fn check_session_body(role: &str) -> String {
    format!(r#"{{"status":true,"code":200,"message":"ok","data":"{role}"}}"#)
}
