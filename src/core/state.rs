//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository del Resource Store e la configurazione
//! necessaria per firmare token e generare hash delle password.

use crate::core::Config;
use crate::repositories::{TodoRepository, UserRepository};
use chrono::Duration;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    /// Repository per la gestione delle todo
    pub todo: TodoRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,

    /// Durata di validità dei token emessi
    pub token_ttl: Duration,

    /// Costo bcrypt per l'hash delle password
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Crea una nuova istanza di AppState con repository vuoti.
    ///
    /// # Arguments
    /// * `jwt_secret` - Chiave segreta per la firma dei token JWT
    /// * `token_ttl` - Durata dei token emessi da register/login
    /// * `bcrypt_cost` - Costo bcrypt (4..=31)
    pub fn new(jwt_secret: String, token_ttl: Duration, bcrypt_cost: u32) -> Self {
        Self {
            user: UserRepository::new(),
            todo: TodoRepository::new(),
            jwt_secret,
            token_ttl,
            bcrypt_cost,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.jwt_secret.clone(),
            Duration::hours(config.jwt_expiration_hours),
            config.bcrypt_cost,
        )
    }
}
