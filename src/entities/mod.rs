//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità (models) custodite dal Resource Store in memoria.
//! Ogni entity corrisponde a una collezione gestita da un repository.

pub mod todo;
pub mod user;

// Re-exports per facilitare l'import
pub use todo::Todo;
pub use user::{User, normalize_email};
