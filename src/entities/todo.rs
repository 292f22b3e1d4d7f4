//! Todo entity - Entità todo appartenente a un utente

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Todo {
    pub todo_id: i32,
    /// Riferimento all'utente proprietario (non una relazione di ownership)
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Aggiorna `updated_at` garantendo che sia strettamente crescente,
    /// anche quando l'orologio non è avanzato dall'ultima modifica.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}
