//! HTTP-level integration tests for signup, login, session use, and logout.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with_sessions, get_auth, login, post_auth,
    post_json, put_json_auth, signup, signup_and_login, TEST_PASSWORD,
};
use districtops_api::auth::session::SessionStore;
use districtops_db::repositories::UserRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_then_login_issues_resolvable_token(pool: PgPool) {
    let sessions = Arc::new(SessionStore::new(chrono::Duration::days(7)));
    let app = build_test_app_with_sessions(pool, Arc::clone(&sessions));

    let created = signup(app.clone(), "asha@district.local").await;
    let user_id = created["user"]["id"].as_i64().expect("user id");
    assert_eq!(created["user"]["email"], "asha@district.local");
    assert_eq!(created["user"]["role"], "personnel");
    assert!(created["user"].get("password").is_none());
    assert!(created["user"].get("passwordHash").is_none());

    let token = login(app, "asha@district.local").await;
    assert_eq!(sessions.resolve(&token).await, Some(user_id));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_response_carries_user_without_password(pool: PgPool) {
    let app = build_test_app(pool);
    signup(app.clone(), "dev@district.local").await;

    let body = serde_json::json!({ "email": "dev@district.local", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["sessionId"].is_string());
    assert_eq!(json["user"]["firstName"], "Test");
    assert!(json["user"].get("passwordHash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn stored_password_is_hashed(pool: PgPool) {
    let app = build_test_app(pool.clone());
    signup(app, "hash@district.local").await;

    let user = UserRepo::find_by_email(&pool, "hash@district.local")
        .await
        .unwrap()
        .expect("user stored");
    assert_ne!(user.password_hash, TEST_PASSWORD);
    assert!(user.password_hash.starts_with("$argon2"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_accepts_explicit_role(pool: PgPool) {
    let body = serde_json::json!({
        "firstName": "Kiran",
        "lastName": "Rao",
        "email": "kiran@district.local",
        "password": TEST_PASSWORD,
        "role": "supervisor",
    });
    let response = post_json(build_test_app(pool), "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["user"]["role"], "supervisor");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_signup_is_409_and_keeps_one_row(pool: PgPool) {
    let app = build_test_app(pool.clone());
    signup(app.clone(), "dup@district.local").await;

    let body = serde_json::json!({
        "firstName": "Other",
        "lastName": "Person",
        "email": "dup@district.local",
        "password": "another-password",
    });
    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("dup@district.local")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_is_401_invalid_credentials(pool: PgPool) {
    let app = build_test_app(pool);
    signup(app.clone(), "pw@district.local").await;

    let body = serde_json::json!({ "email": "pw@district.local", "password": "wrong-password" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "INVALID_CREDENTIALS");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_email_is_indistinguishable_from_wrong_password(pool: PgPool) {
    let body = serde_json::json!({ "email": "ghost@district.local", "password": TEST_PASSWORD });
    let response = post_json(build_test_app(pool), "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn current_user_returns_own_record(pool: PgPool) {
    let app = build_test_app(pool);
    let token = signup_and_login(app.clone(), "me@district.local").await;

    let response = get_auth(app, "/api/auth/user", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "me@district.local");
    assert!(json.get("passwordHash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_update_changes_only_given_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let token = signup_and_login(app.clone(), "profile@district.local").await;

    let body = serde_json::json!({
        "firstName": "Renamed",
        "profileImageUrl": "https://cdn.district.local/p/1.png",
    });
    let response = put_json_auth(app.clone(), "/api/auth/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["firstName"], "Renamed");
    assert_eq!(json["lastName"], "Officer");
    assert_eq!(json["profileImageUrl"], "https://cdn.district.local/p/1.png");

    let response = get_auth(app, "/api/auth/user", &token).await;
    assert_eq!(body_json(response).await["firstName"], "Renamed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_image_accepts_relative_path(pool: PgPool) {
    let app = build_test_app(pool);
    let token = signup_and_login(app.clone(), "avatar@district.local").await;

    let body = serde_json::json!({ "profileImageUrl": "/uploads/p/1.png" });
    let response = put_json_auth(app, "/api/auth/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["profileImageUrl"], "/uploads/p/1.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_email_collision_is_409(pool: PgPool) {
    let app = build_test_app(pool);
    signup(app.clone(), "taken@district.local").await;
    let token = signup_and_login(app.clone(), "mover@district.local").await;

    let body = serde_json::json!({ "email": "taken@district.local" });
    let response = put_json_auth(app, "/api/auth/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_token(pool: PgPool) {
    let app = build_test_app(pool);
    let token = signup_and_login(app.clone(), "bye@district.local").await;

    let response = get_auth(app.clone(), "/api/auth/user", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_auth(app.clone(), "/api/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/api/auth/user", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn each_login_issues_a_distinct_token(pool: PgPool) {
    let app = build_test_app(pool);
    signup(app.clone(), "twice@district.local").await;

    let first = login(app.clone(), "twice@district.local").await;
    let second = login(app.clone(), "twice@district.local").await;
    assert_ne!(first, second);

    // Logging out one session leaves the other usable.
    post_auth(app.clone(), "/api/auth/logout", &first).await;
    let response = get_auth(app, "/api/auth/user", &second).await;
    assert_eq!(response.status(), StatusCode::OK);
}
