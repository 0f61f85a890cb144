//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port with an empty
//! in-memory store, so no external services are required.
//!
//! Run with: cargo test -p status-integration-tests --test api_tests

use reqwest::StatusCode;
use serde_json::Value;
use status_core::UserStatusRepository;
use status_integration_tests::{
    assert_json, assert_status, fixtures::*, TestServer,
};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Own Status Tests
// ============================================================================

#[tokio::test]
async fn test_anonymous_status_is_empty_object() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/user_status").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, serde_json::json!({}));
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_unknown_user_gets_offline_view() {
    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();
    let token = server.token_for(&user_id).unwrap();

    let response = server.get_auth("/api/v1/user_status", &token).await.unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user_id, user_id);
    assert_eq!(body.status, "offline");
    assert!(!body.status_is_user_defined);
    assert!(body.message.is_none());
    assert!(body.clear_at.is_none());
    // Reading never creates a record
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_offline_view_keeps_null_fields() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let response = server.get_auth("/api/v1/user_status", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    for key in ["message", "messageId", "icon", "clearAt"] {
        assert!(body.get(key).is_some_and(Value::is_null), "{key} should be null");
    }
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get_auth("/api/v1/user_status", "not-a-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_set_status() {
    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();
    let token = server.token_for(&user_id).unwrap();

    let response = server
        .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("dnd"))
        .await
        .unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "dnd");
    assert!(body.status_is_user_defined);

    let response = server.get_auth("/api/v1/user_status", &token).await.unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "dnd");
    assert_eq!(server.repo.len(), 1);
}

#[tokio::test]
async fn test_set_status_twice_keeps_one_record() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    for status in ["online", "away"] {
        let response = server
            .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new(status))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    assert_eq!(server.repo.len(), 1);
}

#[tokio::test]
async fn test_set_status_requires_token() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .put("/api/v1/user_status/status", &SetStatusBody::new("online"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_set_unknown_status_type() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let response = server
        .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("sleeping"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_malformed_body() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let response = server
        .put_raw_auth("/api/v1/user_status/status", &token, "{\"statusType\":")
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_set_custom_message() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let request = SetCustomBody::new("🏝", "  On vacation  ").clear_at(TEST_NOW + 3600);
    let response = server
        .put_auth("/api/v1/user_status/message/custom", &token, &request)
        .await
        .unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message.as_deref(), Some("On vacation"));
    assert_eq!(body.icon.as_deref(), Some("🏝"));
    assert_eq!(body.clear_at, Some(TEST_NOW + 3600));
    assert!(!body.message_is_predefined);
    assert!(body.message_id.is_none());
    // First write without a status keeps the default
    assert_eq!(body.status, "offline");
    assert!(!body.status_is_user_defined);
}

#[tokio::test]
async fn test_custom_message_keeps_status() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    server
        .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("away"))
        .await
        .unwrap();
    let response = server
        .put_auth(
            "/api/v1/user_status/message/custom",
            &token,
            &SetCustomBody::new("☕", "Coffee"),
        )
        .await
        .unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.status, "away");
    assert!(body.status_is_user_defined);
    assert_eq!(body.message.as_deref(), Some("Coffee"));
}

#[tokio::test]
async fn test_custom_message_rejections() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let rejected = [
        // Past expiry
        SetCustomBody::new("🏝", "Gone").clear_at(TEST_NOW - 1),
        // Expiry equal to now
        SetCustomBody::new("🏝", "Gone").clear_at(TEST_NOW),
        // Icon is not a single emoji
        SetCustomBody::new("ab", "Gone"),
        // Too long
        SetCustomBody::new("🏝", &"x".repeat(81)),
        // Nothing to set
        SetCustomBody::default(),
    ];

    for request in &rejected {
        let response = server
            .put_auth("/api/v1/user_status/message/custom", &token, request)
            .await
            .unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_padded_message_at_length_limit_is_accepted() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let message = "m".repeat(80);
    let request = SetCustomBody::new("📝", &format!("  {message}  "));
    let response = server
        .put_auth("/api/v1/user_status/message/custom", &token, &request)
        .await
        .unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message.as_deref(), Some(message.as_str()));
}

#[tokio::test]
async fn test_set_predefined_message() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let response = server
        .put_auth(
            "/api/v1/user_status/message/predefined",
            &token,
            &SetPredefinedBody::new("meeting"),
        )
        .await
        .unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.message_is_predefined);
    assert_eq!(body.message_id.as_deref(), Some("meeting"));
    assert_eq!(body.message.as_deref(), Some("In a meeting"));
    assert_eq!(body.icon.as_deref(), Some("📅"));
    assert_eq!(body.clear_at, Some(TEST_NOW + 3600));
}

#[tokio::test]
async fn test_set_predefined_message_with_explicit_clear_at() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let mut request = SetPredefinedBody::new("vacationing");
    request.clear_at = Some(TEST_NOW + 86_400);
    let response = server
        .put_auth("/api/v1/user_status/message/predefined", &token, &request)
        .await
        .unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.clear_at, Some(TEST_NOW + 86_400));
}

#[tokio::test]
async fn test_set_unknown_predefined_message() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    let response = server
        .put_auth(
            "/api/v1/user_status/message/predefined",
            &token,
            &SetPredefinedBody::new("napping"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(server.repo.is_empty());
}

#[tokio::test]
async fn test_clear_message_keeps_status() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(&unique_user_id()).unwrap();

    server
        .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("dnd"))
        .await
        .unwrap();
    server
        .put_auth(
            "/api/v1/user_status/message/custom",
            &token,
            &SetCustomBody::new("🎧", "Focus time"),
        )
        .await
        .unwrap();

    let response = server
        .delete_auth("/api/v1/user_status/message", &token)
        .await
        .unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.status, "dnd");
    assert!(body.message.is_none());
    assert!(body.icon.is_none());
    assert!(body.clear_at.is_none());
}

#[tokio::test]
async fn test_remove_status() {
    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();
    let token = server.token_for(&user_id).unwrap();

    server
        .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("online"))
        .await
        .unwrap();

    let response = server.delete_auth("/api/v1/user_status", &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert!(server.repo.is_empty());

    // A second delete finds nothing
    let response = server.delete_auth("/api/v1/user_status", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/api/v1/user_status", &token).await.unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "offline");
}

// ============================================================================
// Public Status Tests
// ============================================================================

#[tokio::test]
async fn test_get_other_user_status() {
    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();
    let token = server.token_for(&user_id).unwrap();

    server
        .put_auth(
            "/api/v1/user_status/message/custom",
            &token,
            &SetCustomBody::new("🚆", "Commuting"),
        )
        .await
        .unwrap();
    server
        .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("online"))
        .await
        .unwrap();

    let response = server.get(&format!("/api/v1/statuses/{user_id}")).await.unwrap();
    let body: PublicStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user_id, user_id);
    assert_eq!(body.status, "online");
    assert_eq!(body.message.as_deref(), Some("Commuting"));
    assert_eq!(body.icon.as_deref(), Some("🚆"));
    assert!(body.clear_at.is_none());
}

#[tokio::test]
async fn test_invisible_is_public_offline() {
    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();
    let token = server.token_for(&user_id).unwrap();

    server
        .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("invisible"))
        .await
        .unwrap();

    let response = server.get(&format!("/api/v1/statuses/{user_id}")).await.unwrap();
    let body: PublicStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "offline");

    // The owner still sees the real value
    let response = server.get_auth("/api/v1/user_status", &token).await.unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "invisible");
}

#[tokio::test]
async fn test_get_unknown_user_status() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/statuses/nobody").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!body.error.message.is_empty());
}

#[tokio::test]
async fn test_list_statuses_with_pagination() {
    let server = TestServer::start().await.unwrap();
    let users: Vec<String> = (0..3).map(|_| unique_user_id()).collect();

    for user_id in &users {
        let token = server.token_for(user_id).unwrap();
        server
            .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("online"))
            .await
            .unwrap();
    }

    let response = server.get("/api/v1/statuses").await.unwrap();
    let all: Vec<PublicStatusBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = all.iter().map(|s| s.user_id.as_str()).collect();
    assert_eq!(ids, users.iter().map(String::as_str).collect::<Vec<_>>());

    let response = server.get("/api/v1/statuses?limit=1&offset=1").await.unwrap();
    let page: Vec<PublicStatusBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].user_id, users[1]);

    let response = server.get("/api/v1/statuses?offset=10").await.unwrap();
    let page: Vec<PublicStatusBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_list_statuses_rejects_bad_query() {
    let server = TestServer::start().await.unwrap();

    for query in ["limit=-1", "offset=-5", "limit=5000", "limit=abc"] {
        let response = server
            .get(&format!("/api/v1/statuses?{query}"))
            .await
            .unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}

#[tokio::test]
async fn test_predefined_catalog() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/predefined_statuses").await.unwrap();
    let catalog: Vec<PredefinedStatusBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        ["meeting", "commuting", "remote-work", "sick-leave", "vacationing"]
    );
    assert!(catalog.iter().all(|s| !s.icon.is_empty() && !s.message.is_empty()));
}

// ============================================================================
// Expiry Tests
// ============================================================================

#[tokio::test]
async fn test_sweep_clears_expired_message() {
    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();
    let token = server.token_for(&user_id).unwrap();

    server
        .put_auth("/api/v1/user_status/status", &token, &SetStatusBody::new("away"))
        .await
        .unwrap();
    server
        .put_auth(
            "/api/v1/user_status/message/custom",
            &token,
            &SetCustomBody::new("🍔", "Lunch").clear_at(TEST_NOW + 1800),
        )
        .await
        .unwrap();

    // Expiry equal to now is not yet expired
    server.clock.set(TEST_NOW + 1800);
    assert_eq!(server.sweep().await.unwrap(), 0);

    server.clock.set(TEST_NOW + 1801);
    assert_eq!(server.sweep().await.unwrap(), 1);
    assert_eq!(server.sweep().await.unwrap(), 0);

    let stored = server.repo.find_by_user_id(&user_id).await.unwrap();
    assert!(stored.custom_message.is_none());
    assert!(stored.clear_at.is_none());

    let response = server.get_auth("/api/v1/user_status", &token).await.unwrap();
    let body: UserStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "away");
    assert!(body.message.is_none());
    assert!(body.icon.is_none());
}
