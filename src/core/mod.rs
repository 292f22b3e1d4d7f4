//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione e JWT
//! - Configurazione
//! - Gestione errori
//! - Extractor per body, query e path con errori JSON
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AuthError, Claims, authentication_middleware, decode_jwt, encode_jwt};
pub use config::Config;
pub use error::AppError;
pub use extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
pub use state::AppState;
