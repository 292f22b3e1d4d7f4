//! Todo services - CRUD sulle todo dell'utente autenticato
//!
//! Ogni accesso per id usa la chiave `(user_id, todo_id)`: una todo di un altro
//! utente risponde 404 esattamente come una todo inesistente.

use crate::core::{AppError, AppState, ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::dtos::{CreateTodoDTO, NewTodoDTO, TodoDTO, TodoListQuery, UpdateTodoDTO};
use crate::entities::User;
use crate::repositories::{Create, Delete, Read, StoreError, Update};
use axum::{
    Extension,
    extract::{Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

fn todo_not_found(err: StoreError) -> AppError {
    match err {
        StoreError::NotFound => {
            warn!("Todo not found for caller");
            AppError::not_found("Todo not found")
        }
        other => other.into(),
    }
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedQuery(params): ValidatedQuery<TodoListQuery>, // /api/todos?completed=true&skip=0&limit=100
) -> Result<Json<Vec<TodoDTO>>, AppError> {
    debug!("Listing todos");
    let todos = state
        .todo
        .find_many_by_user_id(&current_user.user_id, &params)
        .await?;

    info!("Found {} todos", todos.len());
    Ok(Json(todos.into_iter().map(TodoDTO::from).collect()))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedPath(todo_id): ValidatedPath<i32>,
) -> Result<Json<TodoDTO>, AppError> {
    let todo = state
        .todo
        .read(&(current_user.user_id, todo_id))
        .await?
        .ok_or(StoreError::NotFound)
        .map_err(todo_not_found)?;

    Ok(Json(TodoDTO::from(todo)))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedJson(body): ValidatedJson<NewTodoDTO>,
) -> Result<(StatusCode, Json<TodoDTO>), AppError> {
    debug!("Creating new todo");
    let todo = state
        .todo
        .create(&CreateTodoDTO::new(current_user.user_id, body))
        .await?;

    info!("Todo {} created", todo.todo_id);
    Ok((StatusCode::CREATED, Json(TodoDTO::from(todo))))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedPath(todo_id): ValidatedPath<i32>,
    ValidatedJson(body): ValidatedJson<UpdateTodoDTO>,
) -> Result<Json<TodoDTO>, AppError> {
    debug!("Updating todo");
    let todo = state
        .todo
        .update(&(current_user.user_id, todo_id), &body)
        .await
        .map_err(todo_not_found)?;

    info!("Todo {} updated", todo.todo_id);
    Ok(Json(TodoDTO::from(todo)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedPath(todo_id): ValidatedPath<i32>,
) -> Result<StatusCode, AppError> {
    state
        .todo
        .delete(&(current_user.user_id, todo_id))
        .await
        .map_err(todo_not_found)?;

    info!("Todo {} deleted", todo_id);
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn toggle_todo(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedPath(todo_id): ValidatedPath<i32>,
) -> Result<Json<TodoDTO>, AppError> {
    let todo = state
        .todo
        .toggle_completed(&(current_user.user_id, todo_id))
        .await
        .map_err(todo_not_found)?;

    info!("Todo {} toggled to completed={}", todo.todo_id, todo.completed);
    Ok(Json(TodoDTO::from(todo)))
}
