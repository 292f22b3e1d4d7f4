//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod todo;

// Re-exports per facilitare l'import
pub use auth::{get_me, login_user, register_user};
pub use todo::{create_todo, delete_todo, get_todo, list_todos, toggle_todo, update_todo};

use crate::core::{AppError, AppState};
use axum::{Json, extract::State};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

/// Root endpoint - metadati dell'API
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Todo API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": {
                "register": "POST /api/auth/register",
                "login": "POST /api/auth/login",
                "me": "GET /api/auth/me"
            },
            "todos": {
                "list": "GET /api/todos",
                "get": "GET /api/todos/{id}",
                "create": "POST /api/todos",
                "update": "PUT /api/todos/{id}",
                "delete": "DELETE /api/todos/{id}",
                "toggle": "PATCH /api/todos/{id}/toggle"
            }
        }
    }))
}

/// Health check con il numero di record nel Resource Store
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now(),
        "users": state.user.count().await,
        "todos": state.todo.count().await
    }))
}

/// Fallback per le route inesistenti
pub async fn fallback() -> AppError {
    AppError::not_found("Endpoint not found")
}
