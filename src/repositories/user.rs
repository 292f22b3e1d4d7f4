//! UserRepository - Repository per la gestione degli utenti

use super::{next_id, Create, Read, StoreError};
use crate::dtos::CreateUserDTO;
use crate::entities::User;
use chrono::Utc;
use std::sync::atomic::AtomicI32;
use tokio::sync::RwLock;

// USER REPO
pub struct UserRepository {
    users: RwLock<Vec<User>>,
    next_id: AtomicI32,
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository {
    pub fn new() -> UserRepository {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Find user by exact email match (email is considered unique).
    /// The caller is expected to pass an already normalized email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    /// `data.password` must already be hashed
    async fn create(&self, data: &CreateUserDTO) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        // controllo e inserimento sotto lo stesso lock in scrittura
        if users.iter().any(|u| u.email == data.email) {
            return Err(StoreError::Conflict("User with this email already exists"));
        }

        let user = User {
            user_id: next_id(&self.next_id)?,
            username: data.username.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }
}

impl Read<User, i32> for UserRepository {
    async fn read(&self, id: &i32) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id == *id).cloned())
    }
}
