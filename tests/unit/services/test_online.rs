use manager_client::client::ManagerClient;
use manager_client::config::Config;
use manager_client::services::online::{OnlineService, OnlineServiceImpl};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

fn service_for(base_url: &str) -> OnlineServiceImpl<ManagerClient> {
    let config = Config::with_base_url(base_url);
    let client = ManagerClient::new(config).expect("client");
    OnlineServiceImpl::new(client.config(), Arc::new(client))
}

#[tokio::test]
async fn tree_passes_a_successful_envelope_through() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/manager/online/tree")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status":true,"code":200,"message":"ok","data":[{"user_id":1,"sessions":[{"session_id":"abc"}]}]}"#,
        )
        .create_async()
        .await;

    let service = service_for(&server.url());
    let envelope = service.tree().await;

    mock.assert_async().await;
    assert!(envelope.is_success());
    assert_eq!(
        envelope.data,
        Some(json!([{"user_id": 1, "sessions": [{"session_id": "abc"}]}]))
    );
}

#[tokio::test]
async fn delete_session_sends_the_session_id_as_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/manager/online/session")
        .match_query(Matcher::UrlEncoded("session_id".into(), "abc".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":true,"code":200,"message":"closed","data":null}"#)
        .create_async()
        .await;

    let service = service_for(&server.url());
    let envelope = service.delete_session("abc").await;

    mock.assert_async().await;
    assert!(envelope.is_success());
}

#[tokio::test]
async fn delete_session_against_404_yields_a_failure_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/api/manager/online/session")
        .match_query(Matcher::UrlEncoded("session_id".into(), "abc".into()))
        .with_status(404)
        .create_async()
        .await;

    let service = service_for(&server.url());
    let envelope = service.delete_session("abc").await;

    assert!(!envelope.status);
    assert_eq!(envelope.code, 404);
    assert_eq!(envelope.data, None);
    assert!(!envelope.message.is_empty());
}

#[tokio::test]
async fn unreachable_server_yields_a_synthesized_500() {
    // nothing listens on port 9 locally, the connection is refused
    let service = service_for("http://127.0.0.1:9");
    let envelope = service.tree().await;

    assert!(!envelope.status);
    assert_eq!(envelope.code, 500);
    assert_eq!(envelope.data, None);
    assert!(!envelope.message.is_empty());
}
