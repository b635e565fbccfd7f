mod common;

use common::TestEnvironment;
use mealie_client::client::{ApiError, MealieClient, RequestBody};
use mealie_client::config::ClientConfig;
use pretty_assertions::assert_eq;
use reqwest::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_set_token_reaches_transport() {
    let mut env = TestEnvironment::new();
    assert!(!env.client.is_authenticated());
    assert_eq!(env.transport.token(), None);

    env.client.set_token("abcdefghijklmnop".to_string());

    assert!(env.client.is_authenticated());
    assert_eq!(env.client.get_token(), Some("abcdefghijklmnop"));
    assert_eq!(env.client.get_token_preview().as_deref(), Some("abcdefghij..."));
    assert_eq!(env.transport.token().as_deref(), Some("abcdefghijklmnop"));
}

#[tokio::test]
async fn test_logout_clears_token_everywhere() {
    let mut env = TestEnvironment::new();
    env.client.set_token("token".to_string());

    env.client.logout();

    assert!(!env.client.is_authenticated());
    assert_eq!(env.client.get_token(), None);
    assert_eq!(env.client.get_token_preview(), None);
    assert_eq!(env.transport.token(), None);
}

#[tokio::test]
async fn test_unauthorized_response_surfaces_status() {
    let env = TestEnvironment::new();
    env.transport
        .respond(StatusCode::UNAUTHORIZED, r#"{"detail":"Not authenticated"}"#);

    let err = env.client.households.get_current_user_household().await.unwrap_err();

    match err.downcast_ref::<ApiError>() {
        Some(ApiError::Status { status, path, body, .. }) => {
            assert_eq!(*status, StatusCode::UNAUTHORIZED);
            assert_eq!(path, "/api/households/self");
            assert!(body.contains("Not authenticated"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_config_token_is_applied() {
    let config = ClientConfig::from_lookup(|key| match key {
        "MEALIE_BASE_URL" => Some("http://mealie.test/".to_string()),
        "MEALIE_API_TOKEN" => Some("long-lived".to_string()),
        _ => None,
    });

    let client = MealieClient::from_config(&config).unwrap();

    assert!(client.is_authenticated());
    assert_eq!(client.get_token(), Some("long-lived"));
}

#[tokio::test]
async fn test_authentication_failure_when_unreachable() {
    common::init_test_logging();
    let mut client = MealieClient::new("http://127.0.0.1:9".to_string());

    let result = client
        .authenticate("invalid_user".to_string(), "wrong_password".to_string())
        .await;

    assert!(result.is_err(), "Should fail without a reachable server");
    assert!(!client.is_authenticated(), "Client should not be authenticated");
    assert!(client.get_token().is_none(), "Should not have authentication token");
}

#[tokio::test]
async fn test_login_goes_through_transport() {
    let mut env = TestEnvironment::new();
    env.transport
        .respond_json(json!({ "access_token": "jwt-token-value", "token_type": "bearer" }));

    env.client
        .authenticate("cook@example.com".to_string(), "secret".to_string())
        .await
        .unwrap();

    let request = env.transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/auth/token");
    assert_eq!(
        request.body,
        RequestBody::UrlEncoded(vec![
            ("password".to_string(), "secret".to_string()),
            ("remember_me".to_string(), "false".to_string()),
            ("username".to_string(), "cook@example.com".to_string()),
        ])
    );
    assert!(env.client.is_authenticated());
    assert_eq!(env.transport.token().as_deref(), Some("jwt-token-value"));
}

#[tokio::test]
async fn test_rejected_login_maps_status() {
    let mut env = TestEnvironment::new();
    env.transport
        .respond(StatusCode::UNAUTHORIZED, r#"{"detail":"Unauthorized"}"#);

    let err = env
        .client
        .authenticate("cook@example.com".to_string(), "wrong".to_string())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Authentication failed: Invalid username or password");
    assert!(!env.client.is_authenticated());
    assert_eq!(env.transport.token(), None);
}
