//! Actions API integration tests.
//!
//! These tests exercise the client against a wiremock server:
//! - Catalog fetch and JSON decoding for `GET /GetActions`
//! - Strict 204-only success contract for `POST /DoAction`
//! - Transport and decode failure surfaces

use keydeck_client::{ActionClientBuilder, ClientError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> keydeck_client::ActionClient {
    ActionClientBuilder::new()
        .base_url(server.uri())
        .build()
        .expect("client builds against mock server uri")
}

#[tokio::test]
async fn get_actions_decodes_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/GetActions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "actions": [
                {"id": "x1", "name": "Clip", "group": "obs", "enabled": true, "subactions_count": 2},
                {"id": "x2", "name": "Sound", "group": "audio", "enabled": true, "subactions_count": 0},
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let catalog = client.get_actions().await.unwrap();

    assert_eq!(catalog.count, 2);
    assert_eq!(catalog.actions.len(), 2);
    assert_eq!(catalog.actions[0].id, "x1");
    assert_eq!(catalog.actions[0].name, "Clip");
    assert_eq!(catalog.actions[1].id, "x2");
}

#[tokio::test]
async fn get_actions_rejects_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/GetActions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_actions().await;

    assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn get_actions_surfaces_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/GetActions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_actions().await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn get_actions_surfaces_transport_error() {
    // Nothing listens here; the connection is refused before any HTTP exchange.
    let client = ActionClientBuilder::new()
        .base_url("http://127.0.0.1:1".to_string())
        .build()
        .unwrap();

    let result = client.get_actions().await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

#[tokio::test]
async fn do_action_posts_nested_id_and_accepts_204() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/DoAction"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"action": {"id": "x2"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.do_action("x2").await.unwrap();
}

#[tokio::test]
async fn do_action_rejects_success_statuses_other_than_204() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/DoAction"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.do_action("x1").await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 200, .. })
    ));
}

#[tokio::test]
async fn do_action_rejects_error_statuses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/DoAction"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.do_action("missing").await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn do_action_surfaces_transport_error() {
    let client = ActionClientBuilder::new()
        .base_url("http://127.0.0.1:1".to_string())
        .build()
        .unwrap();

    let result = client.do_action("x1").await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}
