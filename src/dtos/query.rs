//! Query DTOs - Data Transfer Objects per query string

use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: usize = 100;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// DTO per query parameters della lista todo: /api/todos?completed=true&skip=0&limit=10
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TodoListQuery {
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for TodoListQuery {
    fn default() -> Self {
        Self {
            completed: None,
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
