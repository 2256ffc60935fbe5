use manager_client::error::AppError;
use manager_client::model::response::{ManagerResponse, Role};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[test]
fn success_envelope_deserializes_with_payload() {
    let raw = r#"{"status":true,"code":200,"message":"ok","data":[{"user_id":1}]}"#;
    let envelope: ManagerResponse<Value> = serde_json::from_str(raw).expect("envelope");

    assert!(envelope.is_success());
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.message, "ok");
    assert_eq!(envelope.data, Some(json!([{"user_id": 1}])));
}

#[test]
fn missing_data_field_reads_as_none() {
    let raw = r#"{"status":false,"code":500,"message":"boom"}"#;
    let envelope: ManagerResponse<Value> = serde_json::from_str(raw).expect("envelope");

    assert!(!envelope.is_success());
    assert_eq!(envelope.data, None);
}

#[test]
fn null_data_reads_as_none() {
    let raw = r#"{"status":false,"code":404,"message":"gone","data":null}"#;
    let envelope: ManagerResponse<String> = serde_json::from_str(raw).expect("envelope");

    assert_eq!(envelope.data, None);
}

#[test]
fn failure_envelope_serializes_null_data() {
    let envelope: ManagerResponse<Value> = ManagerResponse::failure(500, "网络错误");
    let json = serde_json::to_value(&envelope).expect("serialize");

    assert_eq!(
        json,
        json!({"status": false, "code": 500, "message": "网络错误", "data": null})
    );
}

#[test]
fn failure_never_carries_an_empty_message() {
    let envelope: ManagerResponse<Value> = ManagerResponse::failure(500, "");
    assert!(!envelope.message.is_empty());
}

#[test]
fn from_app_error_uses_known_status_codes() {
    let envelope: ManagerResponse<Value> = ManagerResponse::from_app_error(&AppError::NotFound);
    assert!(!envelope.status);
    assert_eq!(envelope.code, 404);
    assert_eq!(envelope.data, None);
    assert!(!envelope.message.is_empty());
}

#[test]
fn from_app_error_falls_back_to_500() {
    let envelope: ManagerResponse<Value> =
        ManagerResponse::from_app_error(&AppError::InvalidInput(String::from("bad url")));
    assert_eq!(envelope.code, 500);
}

#[test]
fn from_app_error_extracts_server_message_from_rejection_body() {
    let err = AppError::Rejected {
        status: StatusCode::BAD_REQUEST,
        body: String::from(r#"{"status":false,"code":400,"message":"角色不可用","data":null}"#),
    };
    let envelope: ManagerResponse<Value> = ManagerResponse::from_app_error(&err);

    assert_eq!(envelope.code, 400);
    assert_eq!(envelope.message, "角色不可用");
}

#[test]
fn from_app_error_survives_non_json_rejection_body() {
    let err = AppError::Rejected {
        status: StatusCode::BAD_GATEWAY,
        body: String::from("<html>bad gateway</html>"),
    };
    let envelope: ManagerResponse<Value> = ManagerResponse::from_app_error(&err);

    assert_eq!(envelope.code, 502);
    assert!(envelope.message.contains("502"));
}

#[test]
fn role_deserializes_from_wire_strings() {
    let admin: Role = serde_json::from_str(r#""Admin""#).expect("admin");
    let user: Role = serde_json::from_str(r#""User""#).expect("user");

    assert!(admin.is_admin());
    assert!(!user.is_admin());
}

#[test]
fn role_displays_as_wire_string() {
    assert_eq!(Role::Admin.to_string(), "Admin");
    assert_eq!(Role::User.to_string(), "User");
}

#[test]
fn unknown_role_string_fails_to_parse() {
    let parsed = serde_json::from_str::<Role>(r#""Moderator""#);
    assert!(parsed.is_err());
}
