//! User DTOs - Data Transfer Objects per utenti

use crate::entities::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        // la password non viene mai esposta al client
        Self {
            id: value.user_id,
            username: value.username,
            email: value.email,
            created_at: value.created_at,
        }
    }
}

/// DTO per creare un nuovo utente (senza user_id).
/// Arriva dal client con la password in chiaro, viene passato al repository con l'hash.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// DTO per il login (email e password)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct LoginDTO {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    pub password: String,
}

/// Risposta di register/login: utente + bearer token
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponseDTO {
    pub user: UserDTO,
    pub access_token: String,
    pub token_type: String,
}

impl AuthResponseDTO {
    pub fn bearer(user: User, access_token: String) -> Self {
        Self {
            user: UserDTO::from(user),
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
