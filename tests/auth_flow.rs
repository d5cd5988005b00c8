use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use session_manager::application::{
    AuthResultNormalizer, AuthTokenDtoMapper, LoginUseCase, RegisterUseCase, ResolveSessionUseCase,
};
use session_manager::domain::entities::{AuthLoginRequest, AuthRegistrationRequest};
use session_manager::domain::{AuthToken, AuthTokenStorePort, Resource, ResponseType};
use session_manager::infrastructure::{HttpAuthRemote, InMemoryAuthTokenStore};

struct Harness {
    login: LoginUseCase,
    register: RegisterUseCase,
    store: Arc<InMemoryAuthTokenStore>,
}

fn harness(server: &MockServer) -> Harness {
    let remote = Arc::new(HttpAuthRemote::with_base_url(server.base_url()).unwrap());
    let store = Arc::new(InMemoryAuthTokenStore::new());
    let normalizer = AuthResultNormalizer::new(store.clone(), AuthTokenDtoMapper);

    Harness {
        login: LoginUseCase::new(remote.clone(), normalizer.clone()),
        register: RegisterUseCase::new(remote, normalizer),
        store,
    }
}

fn error_kind(result: &Resource<AuthToken>) -> ResponseType {
    result
        .data()
        .error_response()
        .expect("error resource carries a state response")
        .error_response_type
}

#[tokio::test]
async fn login_success_persists_token_for_email() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(200).json_body(json!({ "token": "abc123" }));
        })
        .await;
    let h = harness(&server);

    let result = h
        .login
        .execute(AuthLoginRequest::new("a@b.com", "secret"))
        .await;

    assert_eq!(result, Resource::success(AuthToken::new("abc123")));
    let stored = h.store.find_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(stored.token, "abc123");
    assert_eq!(h.store.len().await, 1);
}

#[tokio::test]
async fn login_rejected_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(401)
                .json_body(json!({ "error": "Invalid credentials" }));
        })
        .await;
    let h = harness(&server);

    let result = h
        .login
        .execute(AuthLoginRequest::new("a@b.com", "wrong"))
        .await;

    assert_eq!(result.message(), Some("Invalid credentials"));
    assert_eq!(error_kind(&result), ResponseType::Dialog);
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn register_without_body_is_unknown_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/register");
            then.status(200);
        })
        .await;
    let h = harness(&server);

    let result = h
        .register
        .execute(AuthRegistrationRequest::new("a@b.com", "pw", "pw", "alice"))
        .await;

    assert_eq!(result.message(), Some("Unknown error"));
    assert_eq!(error_kind(&result), ResponseType::Toast);
}

#[tokio::test]
async fn login_server_failure_without_body_is_unknown_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(500);
        })
        .await;
    let h = harness(&server);

    let result = h
        .login
        .execute(AuthLoginRequest::new("a@b.com", "secret"))
        .await;

    assert_eq!(result.message(), Some("Unknown error"));
    assert_eq!(error_kind(&result), ResponseType::Toast);
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn register_success_does_not_persist() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/register");
            then.status(200).json_body(json!({ "token": "fresh" }));
        })
        .await;
    let h = harness(&server);

    let result = h
        .register
        .execute(AuthRegistrationRequest::new("a@b.com", "pw", "pw", "alice"))
        .await;

    assert!(result.is_success());
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn login_with_padded_email_resolves_later() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(200).json_body(json!({ "token": "abc123" }));
        })
        .await;
    let h = harness(&server);

    let result = h
        .login
        .execute(AuthLoginRequest::new(" a@b.com", "secret"))
        .await;
    assert!(result.is_success());

    let session = ResolveSessionUseCase::new(h.store.clone())
        .execute("a@b.com ")
        .await
        .unwrap()
        .expect("session stored under trimmed email");
    assert_eq!(session.token, "abc123");
}
