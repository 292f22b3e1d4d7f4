#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use std::sync::Arc;
use todo_api::core::{AppState, Claims};

pub const TEST_JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Crea un AppState per i test (bcrypt al costo minimo per non rallentare la suite)
pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        TEST_JWT_SECRET.to_string(),
        Duration::hours(24),
        4,
    ))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = todo_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT token per testing con scadenza relativa a "adesso"
///
/// # Arguments
/// * `user_id` - ID dell'utente per cui generare il token
/// * `expires_in` - Durata residua (negativa per un token già scaduto)
pub fn create_test_jwt(user_id: i32, expires_in: Duration) -> String {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp() as usize,
        exp: (now + expires_in).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Registra un utente e restituisce (user_id, access_token)
pub async fn register(server: &TestServer, username: &str, email: &str) -> (i32, String) {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": "Password123"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    let id = body["user"]["id"].as_i64().expect("user id") as i32;
    let token = body["access_token"].as_str().expect("token").to_string();
    (id, token)
}

/// Crea una todo per l'utente del token e restituisce il body JSON
pub async fn create_todo(server: &TestServer, token: &str, title: &str) -> Value {
    let response = server
        .post("/api/todos")
        .authorization_bearer(token)
        .json(&json!({ "title": title }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

/// Come `create_todo`, ma deserializzato nel DTO tipizzato
pub async fn create_todo_dto(
    server: &TestServer,
    token: &str,
    title: &str,
) -> todo_api::dtos::TodoDTO {
    serde_json::from_value(create_todo(server, token, title).await).expect("todo dto")
}
