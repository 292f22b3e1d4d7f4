//! Common repository traits
//!
//! This module defines generic interfaces for Resource Store operations.

use super::StoreError;

/// Trait for creating new entities in the store
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the store)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the store
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID and timestamps assigned by the store
    /// * `Err(StoreError::Conflict)` - A uniqueness constraint was violated
    /// * `Err(StoreError::IdsExhausted)` - No identifier left to assign
    async fn create(&self, data: &CreateDTO) -> Result<Entity, StoreError>;
}

/// Trait for reading a single entity by key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the key (e.g. `i32`, or `(user_id, todo_id)` for scoped lookups)
pub trait Read<Entity, Id> {
    /// Reads an entity by its key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that key
    async fn read(&self, id: &Id) -> Result<Option<Entity>, StoreError>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO for updating (optional fields for partial updates)
/// * `Id` - Type of the key
pub trait Update<Entity, UpdateDTO, Id> {
    /// Updates an existing entity
    ///
    /// # Arguments
    /// * `id` - Key of the entity to update
    /// * `data` - DTO containing the fields to update (only `Some(_)` fields are modified)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(StoreError::NotFound)` - No entity with that key
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, StoreError>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the key
pub trait Delete<Id> {
    /// Deletes an entity permanently
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(StoreError::NotFound)` - No entity with that key
    async fn delete(&self, id: &Id) -> Result<(), StoreError>;
}
