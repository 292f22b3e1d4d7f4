//! User entity - Entità utente con metodi per gestione password

use bcrypt::{hash, verify};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    /// Sempre normalizzata con [`normalize_email`]
    pub email: String,
    /// Hash bcrypt, mai la password in chiaro
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with the given cost
    pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
        let hash = hash(password, cost)?;
        Ok(hash)
    }
}

/// Forma canonica dell'email usata sia in registrazione che in login
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
