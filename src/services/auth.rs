//! Auth services - Gestione autenticazione e registrazione utenti

use crate::core::{AppError, AppState, ValidatedJson, encode_jwt};
use crate::dtos::{AuthResponseDTO, CreateUserDTO, LoginDTO, UserDTO};
use crate::entities::{User, normalize_email};
use crate::repositories::Create;
use axum::{
    Extension,
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Header `Authorization: Bearer <token>` restituito insieme al body
fn bearer_headers(token: &str) -> Result<HeaderMap, AppError> {
    let value = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| AppError::internal_server_error("Failed to issue token"))?;
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, value);
    Ok(headers)
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<CreateUserDTO>, // JSON body già validato
) -> Result<(StatusCode, HeaderMap, Json<AuthResponseDTO>), AppError> {
    debug!("Registering new user");
    // 1. Normalizzare l'email (il vincolo di unicità è sull'email normalizzata)
    // 2. Generare l'hash della password, mai salvata in chiaro
    // 3. Salvare l'utente: il repository rifiuta un'email già registrata
    // 4. Generare il token e restituirlo nel body e nell'header Authorization
    let password_hash = User::hash_password(&body.password, state.bcrypt_cost)?;

    let new_user = CreateUserDTO {
        username: body.username,
        email: normalize_email(&body.email),
        password: password_hash,
    };

    let created_user = state
        .user
        .create(&new_user)
        .await
        .inspect_err(|e| warn!("Registration rejected: {}", e))?;

    let token = encode_jwt(created_user.user_id, &state.jwt_secret, state.token_ttl)?;
    let headers = bearer_headers(&token)?;

    info!("User {} registered", created_user.user_id);
    Ok((
        StatusCode::CREATED,
        headers,
        Json(AuthResponseDTO::bearer(created_user, token)),
    ))
}

#[instrument(skip(state, body))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<LoginDTO>,
) -> Result<(HeaderMap, Json<AuthResponseDTO>), AppError> {
    debug!("Login attempt");
    // email sconosciuta e password errata danno la stessa risposta
    let user = state
        .user
        .find_by_email(&normalize_email(&body.email))
        .await?
        .filter(|user| user.verify_password(&body.password))
        .ok_or_else(|| {
            warn!("Invalid login credentials");
            AppError::unauthorized("Invalid email or password")
        })?;

    let token = encode_jwt(user.user_id, &state.jwt_secret, state.token_ttl)?;
    let headers = bearer_headers(&token)?;

    info!("User {} logged in", user.user_id);
    Ok((headers, Json(AuthResponseDTO::bearer(user, token))))
}

#[instrument(skip(current_user), fields(user_id = %current_user.user_id))]
pub async fn get_me(
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
) -> Json<UserDTO> {
    Json(UserDTO::from(current_user))
}
