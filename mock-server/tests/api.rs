use std::sync::Arc;

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, ContactsResult, Fixture, LoginStatus, MockState, Shared};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header("X-Session-Token", token)
        .body(String::new())
        .unwrap()
}

fn state(fixture: Fixture) -> Shared {
    Arc::new(MockState::new(fixture))
}

// --- login_status ---

#[tokio::test]
async fn login_status_issues_token() {
    let resp = app(state(Fixture::alice()))
        .oneshot(get("/login_status?user_email=alice%40example.com"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let status: LoginStatus = body_json(resp).await;
    assert!(status.error.is_empty());
    assert!(!status.session_token.is_empty());
}

#[tokio::test]
async fn login_status_without_email_returns_400() {
    let resp = app(state(Fixture::alice()))
        .oneshot(get("/login_status"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_status_honours_forced_status() {
    let fixture = Fixture {
        login_status: Some(StatusCode::INTERNAL_SERVER_ERROR),
        ..Fixture::alice()
    };
    let resp = app(state(fixture))
        .oneshot(get("/login_status?user_email=alice%40example.com"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- contacts ---

#[tokio::test]
async fn contact_without_token_returns_403() {
    let shared = state(Fixture::alice());
    let resp = app(shared.clone())
        .oneshot(get("/contacts/email/alice%40example.com"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(shared.contact_calls(), 1);
}

#[tokio::test]
async fn contact_with_unknown_token_returns_403() {
    let resp = app(state(Fixture::alice()))
        .oneshot(get_with_token("/contacts/email/alice%40example.com", "forged"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}

// --- full lookup ---

#[tokio::test]
async fn lookup_flow() {
    let shared = state(Fixture::alice());
    let mut app = app(shared.clone()).into_service();

    // login
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/login_status?user_email=alice%40example.com"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let status: LoginStatus = body_json(resp).await;

    // contact
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_with_token(
            "/contacts/email/alice%40example.com",
            &status.session_token,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result: ContactsResult = body_json(resp).await;
    assert_eq!(result.name, "Alice");
    assert_eq!(result.contact.email, "alice@example.com");
    assert_eq!(result.contact.occupations[0].company, "Acme");

    // unknown email
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_with_token(
            "/contacts/email/nobody%40example.com",
            &status.session_token,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert_eq!(shared.login_calls(), 1);
    assert_eq!(shared.contact_calls(), 2);
}

#[tokio::test]
async fn lookup_quota_returns_429() {
    let fixture = Fixture {
        lookup_quota: Some(1),
        ..Fixture::alice()
    };
    let mut app = app(state(fixture)).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/login_status?user_email=alice%40example.com"))
        .await
        .unwrap();
    let status: LoginStatus = body_json(resp).await;

    let mut statuses = Vec::new();
    for _ in 0..2 {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(get_with_token(
                "/contacts/email/alice%40example.com",
                &status.session_token,
            ))
            .await
            .unwrap();
        statuses.push(resp.status());
    }
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]);
}
