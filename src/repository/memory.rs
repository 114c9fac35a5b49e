//! In-memory repository.

use std::collections::BTreeMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{Entity, Repository};

/// Repository holding entities in a map guarded by a lock.
pub struct MemoryRepository<T> {
    entities: RwLock<BTreeMap<Uuid, T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(BTreeMap::new()),
        }
    }
}

fn poisoned<T: Entity>() -> EngineError {
    EngineError::Storage {
        location: format!("memory:{}", T::COLLECTION),
        message: "lock poisoned".to_string(),
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn get(&self, id: Uuid) -> EngineResult<Option<T>> {
        let entities = self.entities.read().map_err(|_| poisoned::<T>())?;
        Ok(entities.get(&id).cloned())
    }

    fn put(&self, entity: T) -> EngineResult<()> {
        let mut entities = self.entities.write().map_err(|_| poisoned::<T>())?;
        entities.insert(entity.id(), entity);
        Ok(())
    }

    fn delete(&self, id: Uuid) -> EngineResult<bool> {
        let mut entities = self.entities.write().map_err(|_| poisoned::<T>())?;
        Ok(entities.remove(&id).is_some())
    }

    fn list_all(&self) -> EngineResult<Vec<T>> {
        let entities = self.entities.read().map_err(|_| poisoned::<T>())?;
        Ok(entities.values().cloned().collect())
    }
}
