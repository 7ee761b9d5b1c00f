//! Authentication gate tests that need no database.
//!
//! The router runs over a lazily connected pool pointing at a closed port, so
//! any request that reached the record store would fail with a 500. A 401 here
//! therefore also proves the handler never queried the database.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with_sessions, get, get_auth, lazy_pool, post_auth,
    post_json, post_json_auth, post_raw, put_json_auth,
};
use districtops_api::auth::session::SessionStore;

const PROTECTED_GETS: &[&str] = &[
    "/api/auth/user",
    "/api/personnel",
    "/api/personnel/on-duty",
    "/api/personnel/1",
    "/api/personnel/1/duties",
    "/api/cases",
    "/api/cases/recent",
    "/api/cases/search?q=theft",
    "/api/cases/1",
    "/api/duties",
    "/api/duties/pending",
    "/api/duties/1",
    "/api/alerts",
    "/api/alerts/active",
    "/api/alerts/1",
    "/api/communications",
    "/api/communications/1",
    "/api/dashboard/stats",
];

#[tokio::test]
async fn missing_authorization_header_is_401() {
    for uri in PROTECTED_GETS {
        let response = get(build_test_app(lazy_pool()), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "GET {uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "UNAUTHORIZED", "GET {uri}");
    }
}

#[tokio::test]
async fn never_issued_token_is_401() {
    for uri in PROTECTED_GETS {
        let response = get_auth(build_test_app(lazy_pool()), uri, "never-issued-token").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "GET {uri}");
    }
}

#[tokio::test]
async fn never_issued_token_cannot_create_records() {
    let body = serde_json::json!({
        "caseNumber": "CR-1",
        "title": "Should never be stored",
        "type": "theft",
    });
    let response =
        post_json_auth(build_test_app(lazy_pool()), "/api/cases", body, "forged").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_session_is_401_and_dropped() {
    let sessions = Arc::new(SessionStore::new(chrono::Duration::zero()));
    let token = sessions.create(1).await;
    let app = build_test_app_with_sessions(lazy_pool(), Arc::clone(&sessions));

    let response = get_auth(app, "/api/personnel", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired session");
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn malformed_authorization_header_is_401() {
    let app = build_test_app(lazy_pool());
    let request = axum::http::Request::builder()
        .uri("/api/personnel")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_token_still_succeeds() {
    let response = post_json(
        build_test_app(lazy_pool()),
        "/api/auth/logout",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Logged out successfully");
}

#[tokio::test]
async fn logout_revokes_presented_session() {
    let sessions = Arc::new(SessionStore::new(chrono::Duration::days(7)));
    let token = sessions.create(5).await;
    let other = sessions.create(6).await;
    let app = build_test_app_with_sessions(lazy_pool(), Arc::clone(&sessions));

    let response = post_auth(app.clone(), "/api/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(sessions.resolve(&token).await, None);
    assert_eq!(sessions.resolve(&other).await, Some(6));

    // A second logout with the same token is still a success.
    let response = post_auth(app, "/api/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unparseable_path_and_query_are_json_400() {
    let sessions = Arc::new(SessionStore::new(chrono::Duration::days(7)));
    let token = sessions.create(1).await;
    let app = build_test_app_with_sessions(lazy_pool(), sessions);

    for uri in [
        "/api/personnel/abc",
        "/api/personnel/abc/duties",
        "/api/cases/1.5",
        "/api/duties/abc",
        "/api/alerts/abc",
        "/api/communications/abc",
        "/api/cases/recent?limit=x",
    ] {
        let response = get_auth(app.clone(), uri, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST", "GET {uri}");
        assert!(json["error"].is_string(), "GET {uri}");
    }
}

#[tokio::test]
async fn empty_profile_image_is_rejected_before_the_database() {
    let sessions = Arc::new(SessionStore::new(chrono::Duration::days(7)));
    let token = sessions.create(1).await;
    let app = build_test_app_with_sessions(lazy_pool(), sessions);

    let body = serde_json::json!({ "profileImageUrl": "" });
    let response = put_json_auth(app, "/api/auth/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let details = &json["details"];
    assert!(
        details
            .get("profile_image_url")
            .or_else(|| details.get("profileImageUrl"))
            .is_some()
    );
}

#[tokio::test]
async fn invalid_signup_body_is_400_with_details() {
    let body = serde_json::json!({
        "firstName": "A",
        "lastName": "Officer",
        "email": "not-an-email",
        "password": "123",
        "role": "sheriff",
    });
    let response = post_json(build_test_app(lazy_pool()), "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let details = &json["details"];
    for (field, alias) in [
        ("first_name", "firstName"),
        ("email", "email"),
        ("password", "password"),
        ("role", "role"),
    ] {
        assert!(
            details.get(field).or_else(|| details.get(alias)).is_some(),
            "expected a validation error for {field}: {json}"
        );
    }
}

#[tokio::test]
async fn invalid_login_body_is_400() {
    let body = serde_json::json!({ "email": "nobody", "password": "x" });
    let response = post_json(build_test_app(lazy_pool()), "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_json_is_400_bad_request() {
    let response = post_raw(
        build_test_app(lazy_pool()),
        "/api/auth/login",
        "{\"email\": ",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let response = get(build_test_app(lazy_pool()), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["dbHealthy"], false);
    assert_eq!(json["activeSessions"], 0);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = get(build_test_app(lazy_pool()), "/api/cases").await;
    assert!(response.headers().contains_key("x-request-id"));
}
