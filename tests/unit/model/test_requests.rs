use assert_json_diff::assert_json_eq;
use manager_client::model::requests::{ChangeRoleRequest, LoginRequest};
use manager_client::model::response::Role;
use serde_json::json;

#[test]
fn login_request_uses_the_userid_wire_key() {
    let request = LoginRequest::new(1001, "secret");
    let value = serde_json::to_value(&request).expect("serialize");

    assert_json_eq!(value, json!({"userid": 1001, "password": "secret"}));
}

#[test]
fn change_role_request_serializes_role_as_string() {
    let request = ChangeRoleRequest::new(7, Role::Admin);
    let value = serde_json::to_value(&request).expect("serialize");

    assert_json_eq!(value, json!({"user_id": 7, "new_role": "Admin"}));
}

#[test]
fn change_role_request_round_trips() {
    let request = ChangeRoleRequest::new(9, Role::User);
    let json = serde_json::to_string(&request).expect("serialize");
    let back: ChangeRoleRequest = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.user_id, 9);
    assert_eq!(back.new_role, Role::User);
}
