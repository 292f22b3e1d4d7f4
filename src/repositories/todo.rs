//! TodoRepository - Repository per la gestione delle todo
//!
//! Tutte le operazioni per chiave usano la chiave "scoped" `(user_id, todo_id)`:
//! una todo di un altro utente è indistinguibile da una todo inesistente.

use super::{next_id, Create, Delete, Read, StoreError, Update};
use crate::dtos::{CreateTodoDTO, TodoListQuery, UpdateTodoDTO};
use crate::entities::Todo;
use chrono::Utc;
use std::sync::atomic::AtomicI32;
use tokio::sync::RwLock;

/// Chiave scoped: (user_id del chiamante, todo_id)
pub type ScopedTodoKey = (i32, i32);

pub struct TodoRepository {
    todos: RwLock<Vec<Todo>>,
    next_id: AtomicI32,
}

impl Default for TodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn owned_by(todo: &Todo, key: &ScopedTodoKey) -> bool {
    let (user_id, todo_id) = *key;
    todo.user_id == user_id && todo.todo_id == todo_id
}

impl TodoRepository {
    pub fn new() -> TodoRepository {
        Self {
            todos: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Todo dell'utente in ordine di inserimento, filtrate per `completed`
    /// e poi paginate con skip/limit.
    pub async fn find_many_by_user_id(
        &self,
        user_id: &i32,
        query: &TodoListQuery,
    ) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos
            .iter()
            .filter(|t| t.user_id == *user_id)
            .filter(|t| query.completed.is_none_or(|completed| t.completed == completed))
            .skip(query.skip)
            .take(query.limit)
            .cloned()
            .collect())
    }

    /// Inverte il flag `completed` e aggiorna `updated_at`
    pub async fn toggle_completed(&self, key: &ScopedTodoKey) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| owned_by(t, key))
            .ok_or(StoreError::NotFound)?;

        todo.completed = !todo.completed;
        todo.touch();

        Ok(todo.clone())
    }

    pub async fn count(&self) -> usize {
        self.todos.read().await.len()
    }
}

impl Create<Todo, CreateTodoDTO> for TodoRepository {
    async fn create(&self, data: &CreateTodoDTO) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let now = Utc::now();

        let todo = Todo {
            todo_id: next_id(&self.next_id)?,
            user_id: data.user_id,
            title: data.title.clone(),
            description: data.description.clone(),
            completed: false,
            created_at: now,
            updated_at: now,
        };
        todos.push(todo.clone());

        Ok(todo)
    }
}

impl Read<Todo, ScopedTodoKey> for TodoRepository {
    async fn read(&self, key: &ScopedTodoKey) -> Result<Option<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| owned_by(t, key)).cloned())
    }
}

impl Update<Todo, UpdateTodoDTO, ScopedTodoKey> for TodoRepository {
    async fn update(&self, key: &ScopedTodoKey, data: &UpdateTodoDTO) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| owned_by(t, key))
            .ok_or(StoreError::NotFound)?;

        if let Some(ref title) = data.title {
            todo.title = title.clone();
        }
        if let Some(ref description) = data.description {
            todo.description = Some(description.clone());
        }
        if let Some(completed) = data.completed {
            todo.completed = completed;
        }
        // aggiornato anche con patch vuota
        todo.touch();

        Ok(todo.clone())
    }
}

impl Delete<ScopedTodoKey> for TodoRepository {
    async fn delete(&self, key: &ScopedTodoKey) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|t| owned_by(t, key))
            .ok_or(StoreError::NotFound)?;

        // remove (non swap_remove) per preservare l'ordine di inserimento
        todos.remove(index);
        Ok(())
    }
}
