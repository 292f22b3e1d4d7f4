use crate::core::{AppError, AppState};
use crate::repositories::Read;
use axum::extract::State;
use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, Response, header},
    middleware::Next,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub sub: i32,   // user_id del proprietario del token
}

/// Motivi di rifiuto di una credenziale, distinti così il chiamante
/// può scegliere la risposta corretta.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer credential")]
    MissingCredential,
    #[error("expired bearer credential")]
    ExpiredCredential,
    #[error("malformed or invalid bearer credential")]
    InvalidCredential,
}

#[instrument(skip(secret), fields(user_id = %user_id))]
pub fn encode_jwt(
    user_id: i32,
    secret: &str,
    ttl: Duration,
) -> Result<String, AppError> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire = now.checked_add_signed(ttl).ok_or_else(|| {
        error!("Token lifetime out of range: {:?}", ttl);
        AppError::internal_server_error("Failed to issue token")
    })?;
    let claim = Claims {
        iat: now.timestamp() as usize,
        exp: expire.timestamp() as usize,
        sub: user_id,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    info!("JWT token encoded successfully");
    Ok(token)
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<Claims, AuthError> {
    debug!("Decoding JWT token");
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => {
            warn!("JWT token expired");
            AuthError::ExpiredCredential
        }
        _ => {
            warn!("Failed to decode JWT token: {:?}", e);
            AuthError::InvalidCredential
        }
    })
}

/// Estrae il token da `Authorization: Bearer <token>`.
/// Header assente, schema diverso da Bearer o token vuoto contano come credenziale mancante.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthError::InvalidCredential)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        (Some(scheme), Some(_), Some(_)) if scheme.eq_ignore_ascii_case("bearer") => {
            Err(AuthError::InvalidCredential)
        }
        _ => Err(AuthError::MissingCredential),
    }
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let token = bearer_token(req.headers()).inspect_err(|e| warn!("Rejected credential: {}", e))?;
    let claims = decode_jwt(token, &state.jwt_secret)?;

    // un token valido per un utente che non esiste più è comunque invalido
    let current_user = match state.user.read(&claims.sub).await? {
        Some(user) => {
            info!("User authenticated: {}", user.user_id);
            user
        }
        None => {
            warn!("User not found in store: {}", claims.sub);
            return Err(AuthError::InvalidCredential.into());
        }
    };
    req.extensions_mut().insert(current_user);
    // l'handler recupera lo user da Extension
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "test-secret";

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_jwt_roundtrip() {
        let token = encode_jwt(7, SECRET, Duration::hours(1)).unwrap();
        let claims = decode_jwt(&token, SECRET).unwrap();
        assert_eq!(claims.sub, 7);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let err = encode_jwt(7, SECRET, Duration::MAX).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_expired_token_is_classified_as_expired() {
        let token = encode_jwt(7, SECRET, Duration::hours(-1)).unwrap();
        assert_eq!(decode_jwt(&token, SECRET).unwrap_err(), AuthError::ExpiredCredential);
    }

    #[test]
    fn test_wrong_secret_or_garbage_is_invalid() {
        let token = encode_jwt(7, SECRET, Duration::hours(1)).unwrap();
        assert_eq!(
            decode_jwt(&token, "another-secret").unwrap_err(),
            AuthError::InvalidCredential
        );
        assert_eq!(
            decode_jwt("not.a.jwt", SECRET).unwrap_err(),
            AuthError::InvalidCredential
        );
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&headers_with("Bearer abc")), Ok("abc"));
        assert_eq!(bearer_token(&headers_with("bearer abc")), Ok("abc"));
        assert_eq!(
            bearer_token(&HeaderMap::new()),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(
            bearer_token(&headers_with("Basic abc")),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(
            bearer_token(&headers_with("Bearer")),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(
            bearer_token(&headers_with("Bearer abc def")),
            Err(AuthError::InvalidCredential)
        );
    }
}
