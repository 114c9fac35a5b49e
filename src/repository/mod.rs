//! Persistence for engine entities.
//!
//! Entities are stored through the [`Repository`] trait so that whatever owns
//! their lifecycle receives its store explicitly. Two backends are provided:
//! [`MemoryRepository`] for tests and short-lived use, and
//! [`JsonFileRepository`] which keeps each collection in a JSON file.

mod json_file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::Booking;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;

/// A value that can be stored in a repository.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Name of the collection the entity is stored in.
    const COLLECTION: &'static str;

    /// The entity's unique identifier.
    fn id(&self) -> Uuid;
}

impl Entity for Booking {
    const COLLECTION: &'static str = "bookings";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Keyed storage for one entity type.
pub trait Repository<T: Entity>: Send + Sync {
    /// Get an entity by ID.
    fn get(&self, id: Uuid) -> EngineResult<Option<T>>;

    /// Insert or replace an entity.
    fn put(&self, entity: T) -> EngineResult<()>;

    /// Delete an entity. Returns true if it existed.
    fn delete(&self, id: Uuid) -> EngineResult<bool>;

    /// List every stored entity, ordered by ID.
    fn list_all(&self) -> EngineResult<Vec<T>>;
}
