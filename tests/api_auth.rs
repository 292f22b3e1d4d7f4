//! Integration tests per gli endpoints di autenticazione
//!
//! Test per:
//! - POST /api/auth/register
//! - POST /api/auth/login
//! - GET /api/auth/me

mod common;

#[cfg(test)]
mod auth_tests {
    use super::common::*;
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use chrono::Duration;
    use serde_json::{Value, json};

    // ============================================================
    // Test per POST /api/auth/register - register_user
    // ============================================================

    #[tokio::test]
    async fn test_register_success() {
        let server = create_test_server(create_test_state());

        let body = json!({
            "username": "newuser",
            "email": "newuser@example.com",
            "password": "Password123"
        });

        let response = server.post("/api/auth/register").json(&body).await;

        response.assert_status(StatusCode::CREATED);
        let auth_header = response
            .headers()
            .get("authorization")
            .expect("Authorization header should be present")
            .to_str()
            .unwrap()
            .to_string();
        assert!(auth_header.starts_with("Bearer "));

        let payload: Value = response.json();
        assert_eq!(payload["user"]["id"], 1);
        assert_eq!(payload["user"]["username"], "newuser");
        assert_eq!(payload["user"]["email"], "newuser@example.com");
        assert_eq!(payload["token_type"], "bearer");
        assert!(payload["user"].get("password").is_none(), "Password must never be exposed");
        assert_eq!(auth_header, format!("Bearer {}", payload["access_token"].as_str().unwrap()));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let server = create_test_server(create_test_state());
        register(&server, "alice", "alice@example.com").await;

        let body = json!({
            "username": "alice2",
            "email": "Alice@Example.com",
            "password": "Password123"
        });
        let response = server.post("/api/auth/register").json(&body).await;

        response.assert_status_bad_request();
        let payload: Value = response.json();
        assert_eq!(payload["error"], "User with this email already exists");
    }

    #[tokio::test]
    async fn test_register_validation_errors() {
        let server = create_test_server(create_test_state());

        let invalid_bodies = [
            json!({ "username": "ab", "email": "ab@example.com", "password": "Password123" }),
            json!({ "username": "valid", "email": "not-an-email", "password": "Password123" }),
            json!({ "username": "valid", "email": "valid@example.com", "password": "123" }),
            json!({ "username": "valid", "email": "valid@example.com" }),
            json!({}),
        ];

        for body in invalid_bodies {
            let response = server.post("/api/auth/register").json(&body).await;
            response.assert_status_unprocessable_entity();
            let payload: Value = response.json();
            assert!(payload.get("error").is_some());
            assert!(payload.get("details").is_some());
        }
    }

    // ============================================================
    // Test per POST /api/auth/login - login_user
    // ============================================================

    #[tokio::test]
    async fn test_login_success() {
        let server = create_test_server(create_test_state());
        let (id, _) = register(&server, "logintest", "login@example.com").await;

        let body = json!({ "email": "login@example.com", "password": "Password123" });
        let response = server.post("/api/auth/login").json(&body).await;

        response.assert_status_ok();
        assert!(response.headers().get("authorization").is_some());
        let payload: Value = response.json();
        assert_eq!(payload["user"]["id"], id);
        assert_eq!(payload["token_type"], "bearer");

        // il token ottenuto dal login funziona sulle route protette
        let token = payload["access_token"].as_str().unwrap();
        server
            .get("/api/auth/me")
            .authorization_bearer(token)
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let server = create_test_server(create_test_state());
        register(&server, "alice", "alice@example.com").await;

        let body = json!({ "email": "alice@example.com", "password": "wrongpassword" });
        let response = server.post("/api/auth/login").json(&body).await;

        response.assert_status_unauthorized();
        let payload: Value = response.json();
        assert_eq!(payload["error"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_login_nonexistent_user() {
        let server = create_test_server(create_test_state());

        let body = json!({ "email": "nobody@example.com", "password": "password123" });
        let response = server.post("/api/auth/login").json(&body).await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let server = create_test_server(create_test_state());

        let body = json!({ "email": "alice@example.com" });
        let response = server.post("/api/auth/login").json(&body).await;

        // 422 Unprocessable Entity quando manca un campo obbligatorio
        response.assert_status_unprocessable_entity();
    }

    // ============================================================
    // Test per GET /api/auth/me - get_me
    // ============================================================

    #[tokio::test]
    async fn test_me_returns_caller() {
        let server = create_test_server(create_test_state());
        let (id, token) = register(&server, "alice", "alice@example.com").await;

        let response = server.get("/api/auth/me").authorization_bearer(&token).await;

        response.assert_status_ok();
        let payload: Value = response.json();
        assert_eq!(payload["id"], id);
        assert_eq!(payload["username"], "alice");
        assert!(payload.get("password").is_none());
    }

    #[tokio::test]
    async fn test_me_without_token() {
        let server = create_test_server(create_test_state());

        let response = server.get("/api/auth/me").await;

        response.assert_status_unauthorized();
        assert_eq!(response.headers().get("www-authenticate").unwrap(), "Bearer");
        let payload: Value = response.json();
        assert_eq!(payload["error"], "Not authenticated");
    }

    #[tokio::test]
    async fn test_me_with_expired_token() {
        let server = create_test_server(create_test_state());
        let (id, _) = register(&server, "alice", "alice@example.com").await;
        let expired = create_test_jwt(id, Duration::hours(-1));

        let response = server.get("/api/auth/me").authorization_bearer(&expired).await;

        response.assert_status_unauthorized();
        let payload: Value = response.json();
        assert_eq!(payload["error"], "Token has expired");
    }

    #[tokio::test]
    async fn test_me_with_malformed_token() {
        let server = create_test_server(create_test_state());
        register(&server, "alice", "alice@example.com").await;

        let response = server
            .get("/api/auth/me")
            .authorization_bearer("definitely.not.valid")
            .await;

        response.assert_status_unauthorized();
        let payload: Value = response.json();
        assert_eq!(payload["error"], "Invalid authentication credentials");
    }

    #[tokio::test]
    async fn test_me_with_non_bearer_scheme() {
        let server = create_test_server(create_test_state());
        let (_, token) = register(&server, "alice", "alice@example.com").await;

        let response = server
            .get("/api/auth/me")
            .add_header(
                HeaderName::from_static("authorization"),
                HeaderValue::from_str(&format!("Basic {}", token)).unwrap(),
            )
            .await;

        response.assert_status_unauthorized();
        let payload: Value = response.json();
        assert_eq!(payload["error"], "Not authenticated");
    }

    #[tokio::test]
    async fn test_me_with_token_for_unknown_user() {
        let server = create_test_server(create_test_state());
        // firma valida, ma l'utente non esiste nello store
        let token = create_test_jwt(999, Duration::hours(1));

        let response = server.get("/api/auth/me").authorization_bearer(&token).await;

        response.assert_status_unauthorized();
        let payload: Value = response.json();
        assert_eq!(payload["error"], "Invalid authentication credentials");
    }
}
