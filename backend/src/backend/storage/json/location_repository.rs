use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::location::Location;
use crate::backend::storage::traits::LocationStorage;

const SLOT: &str = "locations";

/// JSON-slot location repository.
#[derive(Clone)]
pub struct LocationRepository {
    connection: Arc<JsonConnection>,
    locations: Arc<RwLock<Vec<Location>>>,
}

impl LocationRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let stored: Vec<shared::Location> = connection.read_slot(SLOT);
        debug!("Loaded {} locations from slot", stored.len());
        let locations = stored.into_iter().map(Location::from_dto).collect();
        Self {
            connection,
            locations: Arc::new(RwLock::new(locations)),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<Location>>> {
        self.locations
            .read()
            .map_err(|_| anyhow!("location collection lock poisoned"))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<Location>>> {
        self.locations
            .write()
            .map_err(|_| anyhow!("location collection lock poisoned"))
    }

    fn persist(&self, locations: &[Location]) -> Result<()> {
        let dtos: Vec<shared::Location> = locations.iter().map(Location::to_dto).collect();
        self.connection.write_slot(SLOT, &dtos)
    }
}

impl LocationStorage for LocationRepository {
    fn store_location(&self, location: &Location) -> Result<()> {
        let mut locations = self.write_guard()?;
        locations.push(location.clone());
        self.persist(&locations)
    }

    fn get_location(&self, location_id: &str) -> Result<Option<Location>> {
        let locations = self.read_guard()?;
        Ok(locations.iter().find(|l| l.id == location_id).cloned())
    }

    fn get_location_by_name(&self, name: &str) -> Result<Option<Location>> {
        let locations = self.read_guard()?;
        Ok(locations.iter().find(|l| l.name == name).cloned())
    }

    fn list_locations(&self) -> Result<Vec<Location>> {
        Ok(self.read_guard()?.clone())
    }

    fn update_location(&self, location: &Location) -> Result<bool> {
        let mut locations = self.write_guard()?;
        match locations.iter_mut().find(|l| l.id == location.id) {
            Some(existing) => {
                *existing = location.clone();
                self.persist(&locations)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_location(&self, location_id: &str) -> Result<bool> {
        let mut locations = self.write_guard()?;
        let before = locations.len();
        locations.retain(|l| l.id != location_id);
        if locations.len() == before {
            return Ok(false);
        }
        self.persist(&locations)?;
        Ok(true)
    }

    fn replace_all(&self, new_locations: Vec<Location>) -> Result<()> {
        let mut locations = self.write_guard()?;
        *locations = new_locations;
        self.persist(&locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn setup() -> (LocationRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (LocationRepository::new(Arc::new(connection)), temp_dir)
    }

    #[test]
    fn lookup_by_name_is_case_sensitive() {
        let (repo, _temp_dir) = setup();
        repo.store_location(&Location {
            id: "location::1".to_string(),
            name: "Room A".to_string(),
            created_at: Utc::now(),
        })
        .unwrap();

        assert!(repo.get_location_by_name("Room A").unwrap().is_some());
        assert!(repo.get_location_by_name("room a").unwrap().is_none());
    }
}
