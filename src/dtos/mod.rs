//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod query;
pub mod todo;
pub mod user;

// Re-exports per facilitare l'import
pub use query::TodoListQuery;
pub use todo::{CreateTodoDTO, NewTodoDTO, TodoDTO, UpdateTodoDTO};
pub use user::{AuthResponseDTO, CreateUserDTO, LoginDTO, UserDTO};
