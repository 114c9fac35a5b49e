//! JSON file repository.
//!
//! Each collection lives in `<dir>/<collection>.json` as an array of entities.
//! The file is read once when the repository is opened and rewritten in full
//! after every change.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{Entity, Repository};

/// Repository persisting one collection to a JSON file.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    entities: RwLock<BTreeMap<Uuid, T>>,
}

impl<T: Entity> JsonFileRepository<T> {
    /// Opens the collection file in `dir`, creating the directory if needed.
    ///
    /// A missing file is treated as an empty collection.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use workday_engine::models::Booking;
    /// use workday_engine::repository::{JsonFileRepository, Repository};
    ///
    /// let repo = JsonFileRepository::<Booking>::open("./data")?;
    /// println!("{} bookings stored", repo.list_all()?.len());
    /// # Ok::<(), workday_engine::error::EngineError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(dir: P) -> EngineResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| storage_error(dir, e))?;

        let path = dir.join(format!("{}.json", T::COLLECTION));
        let entities = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| storage_error(&path, e))?;
            let stored: Vec<T> =
                serde_json::from_str(&content).map_err(|e| storage_error(&path, e))?;
            stored.into_iter().map(|e| (e.id(), e)).collect()
        } else {
            BTreeMap::new()
        };

        info!(
            path = %path.display(),
            count = entities.len(),
            "Opened {} collection",
            T::COLLECTION
        );

        Ok(Self {
            path,
            entities: RwLock::new(entities),
        })
    }

    /// The file backing this collection.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn poisoned(&self) -> EngineError {
        EngineError::Storage {
            location: self.path.display().to_string(),
            message: "lock poisoned".to_string(),
        }
    }

    /// Writes the collection to a temporary file and moves it into place.
    fn persist(&self, entities: &BTreeMap<Uuid, T>) -> EngineResult<()> {
        let values: Vec<&T> = entities.values().collect();
        let json = serde_json::to_string_pretty(&values).map_err(|e| storage_error(&self.path, e))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| storage_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage_error(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            count = entities.len(),
            "Persisted collection"
        );
        Ok(())
    }
}

fn storage_error(path: &Path, err: impl std::fmt::Display) -> EngineError {
    EngineError::Storage {
        location: path.display().to_string(),
        message: err.to_string(),
    }
}

impl<T: Entity> Repository<T> for JsonFileRepository<T> {
    fn get(&self, id: Uuid) -> EngineResult<Option<T>> {
        let entities = self.entities.read().map_err(|_| self.poisoned())?;
        Ok(entities.get(&id).cloned())
    }

    fn put(&self, entity: T) -> EngineResult<()> {
        let mut entities = self.entities.write().map_err(|_| self.poisoned())?;
        let previous = entities.insert(entity.id(), entity.clone());

        if let Err(err) = self.persist(&entities) {
            match previous {
                Some(old) => entities.insert(old.id(), old),
                None => entities.remove(&entity.id()),
            };
            return Err(err);
        }
        Ok(())
    }

    fn delete(&self, id: Uuid) -> EngineResult<bool> {
        let mut entities = self.entities.write().map_err(|_| self.poisoned())?;
        let Some(removed) = entities.remove(&id) else {
            return Ok(false);
        };

        if let Err(err) = self.persist(&entities) {
            entities.insert(id, removed);
            return Err(err);
        }
        Ok(true)
    }

    fn list_all(&self) -> EngineResult<Vec<T>> {
        let entities = self.entities.read().map_err(|_| self.poisoned())?;
        Ok(entities.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Booking, BookingKind, DailyType, VehiclePeriod};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn booking_with_period() -> Booking {
        let mut booking = Booking::new(BookingKind::Service, "cust-7");
        booking.periods.push(
            VehiclePeriod::new(
                "bus-03",
                Some("drv-11".to_string()),
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
                DailyType::Disposition12,
                Decimal::from(12),
            )
            .unwrap(),
        );
        booking
    }

    #[test]
    fn test_open_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Booking>::open(dir.path()).unwrap();

        assert!(repo.list_all().unwrap().is_empty());
        assert!(repo.path().ends_with("bookings.json"));
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_entities_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let booking = booking_with_period();

        {
            let repo = JsonFileRepository::<Booking>::open(dir.path()).unwrap();
            repo.put(booking.clone()).unwrap();
        }

        let reopened = JsonFileRepository::<Booking>::open(dir.path()).unwrap();
        assert_eq!(reopened.get(booking.id).unwrap(), Some(booking));
    }

    #[test]
    fn test_delete_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let booking = booking_with_period();

        let repo = JsonFileRepository::<Booking>::open(dir.path()).unwrap();
        repo.put(booking.clone()).unwrap();
        assert!(repo.delete(booking.id).unwrap());
        assert!(!repo.delete(booking.id).unwrap());

        let reopened = JsonFileRepository::<Booking>::open(dir.path()).unwrap();
        assert!(reopened.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_file_holds_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Booking>::open(dir.path()).unwrap();
        repo.put(booking_with_period()).unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        assert!(content.contains("\"customer_id\": \"cust-7\""));
        assert!(content.contains("\"daily_type\": \"disposition_12\""));
        assert!(content.contains("\"date\": \"2024-04-01\""));
    }

    #[test]
    fn test_corrupt_file_returns_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bookings.json"), "{ not json").unwrap();

        match JsonFileRepository::<Booking>::open(dir.path()) {
            Err(EngineError::Storage { location, .. }) => {
                assert!(location.ends_with("bookings.json"));
            }
            Err(other) => panic!("Expected Storage error, got {}", other),
            Ok(_) => panic!("Expected Storage error"),
        }
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("store");

        let repo = JsonFileRepository::<Booking>::open(&nested).unwrap();
        repo.put(booking_with_period()).unwrap();

        assert!(nested.join("bookings.json").exists());
    }
}
