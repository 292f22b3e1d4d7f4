//! Todo DTOs - Data Transfer Objects per todo

use crate::entities::Todo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TodoDTO {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoDTO {
    fn from(value: Todo) -> Self {
        Self {
            id: value.todo_id,
            user_id: value.user_id,
            title: value.title,
            description: value.description,
            completed: value.completed,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Body della richiesta di creazione (il proprietario arriva dal token, non dal client)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct NewTodoDTO {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// DTO per creare una nuova todo nel repository (senza todo_id)
#[derive(Debug, Clone)]
pub struct CreateTodoDTO {
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl CreateTodoDTO {
    pub fn new(user_id: i32, body: NewTodoDTO) -> Self {
        Self {
            user_id,
            title: body.title,
            description: body.description,
        }
    }
}

/// DTO per aggiornare una todo (solo i campi `Some(_)` vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateTodoDTO {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: Option<bool>,
}
