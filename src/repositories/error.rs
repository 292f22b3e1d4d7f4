//! Errori del Resource Store

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Record assente, oppure di proprietà di un altro utente
    #[error("record not found")]
    NotFound,

    /// Violazione di un vincolo di unicità
    #[error("conflict: {0}")]
    Conflict(&'static str),

    /// Il contatore degli identificativi ha raggiunto `i32::MAX`
    #[error("identifier space exhausted")]
    IdsExhausted,
}
