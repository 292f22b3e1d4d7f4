//! Todo API library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, auth};

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::{fallback, health_check, root};

    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .merge(configure_auth_routes(state.clone()))
        .merge(configure_todo_routes(state.clone()))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes di autenticazione (register, login pubbliche; me protetta)
fn configure_auth_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    let public_routes = Router::new()
        .route("/api/auth/register", post(register_user))
        .route("/api/auth/login", post(login_user));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(protected_routes)
}

/// Configura le routes CRUD delle todo, tutte protette
fn configure_todo_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{todo_id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/todos/{todo_id}/toggle", patch(toggle_todo))
        .route_layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
