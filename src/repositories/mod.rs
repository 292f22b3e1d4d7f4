//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository custodisce in memoria i record di una specifica entità.

// ************************* NOTA SUL RESOURCE STORE ************************* //

/*
   I repository tengono i record in un Vec protetto da un tokio::sync::RwLock:
   l'ordine del Vec è l'ordine di inserimento, ed è quello che restituiscono le liste.
   Un solo lock per repository: le letture lo condividono, le scritture sono esclusive.
   L'identificativo viene assegnato da un AtomicI32 posseduto dal repository, incrementato
   (senza overflow) mentre si tiene il lock in scrittura, così id crescenti = ordine di inserimento.
   Gli handler parlano con i repository solo attraverso i trait in `traits`
   (più i pochi metodi di ricerca specifici), quindi cambiare la persistenza
   non tocca i services.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod error;
pub mod todo;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

pub use error::StoreError;
pub use todo::TodoRepository;
pub use user::UserRepository;

use std::sync::atomic::{AtomicI32, Ordering};

/// Prende il prossimo identificativo dal contatore senza mai andare in overflow
pub(crate) fn next_id(counter: &AtomicI32) -> Result<i32, StoreError> {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
        .map_err(|_| StoreError::IdsExhausted)
}
