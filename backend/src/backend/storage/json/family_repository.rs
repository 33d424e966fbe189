use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use super::connection::JsonConnection;
use crate::backend::domain::models::family::Family;
use crate::backend::storage::traits::FamilyStorage;

const SLOT: &str = "families";

/// JSON-slot family repository. The in-memory vector is authoritative; the
/// slot file is rewritten after every mutation, before success is reported.
#[derive(Clone)]
pub struct FamilyRepository {
    connection: Arc<JsonConnection>,
    families: Arc<RwLock<Vec<Family>>>,
}

impl FamilyRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let stored: Vec<shared::Family> = connection.read_slot(SLOT);
        debug!("Loaded {} families from slot", stored.len());
        let families = stored.into_iter().map(Family::from_dto).collect();
        Self {
            connection,
            families: Arc::new(RwLock::new(families)),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<Family>>> {
        self.families
            .read()
            .map_err(|_| anyhow!("family collection lock poisoned"))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<Family>>> {
        self.families
            .write()
            .map_err(|_| anyhow!("family collection lock poisoned"))
    }

    fn persist(&self, families: &[Family]) -> Result<()> {
        let dtos: Vec<shared::Family> = families.iter().map(Family::to_dto).collect();
        self.connection.write_slot(SLOT, &dtos)
    }
}

impl FamilyStorage for FamilyRepository {
    fn store_family(&self, family: &Family) -> Result<()> {
        let mut families = self.write_guard()?;
        families.push(family.clone());
        self.persist(&families)
    }

    fn get_family(&self, family_id: &str) -> Result<Option<Family>> {
        let families = self.read_guard()?;
        Ok(families.iter().find(|f| f.id == family_id).cloned())
    }

    fn list_families(&self) -> Result<Vec<Family>> {
        Ok(self.read_guard()?.clone())
    }

    fn update_family(&self, family: &Family) -> Result<bool> {
        let mut families = self.write_guard()?;
        match families.iter_mut().find(|f| f.id == family.id) {
            Some(existing) => {
                *existing = family.clone();
                self.persist(&families)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_family(&self, family_id: &str) -> Result<bool> {
        let mut families = self.write_guard()?;
        let before = families.len();
        families.retain(|f| f.id != family_id);
        if families.len() == before {
            return Ok(false);
        }
        self.persist(&families)?;
        Ok(true)
    }

    fn rename_location_references(&self, old_name: &str, new_name: &str) -> Result<u32> {
        let mut families = self.write_guard()?;
        let mut updated = 0;
        for family in families.iter_mut() {
            if family.location == old_name {
                family.location = new_name.to_string();
                updated += 1;
            }
        }
        if updated > 0 {
            self.persist(&families)?;
            info!("Moved {} families from {:?} to {:?}", updated, old_name, new_name);
        }
        Ok(updated)
    }

    fn replace_all(&self, new_families: Vec<Family>) -> Result<()> {
        let mut families = self.write_guard()?;
        *families = new_families;
        self.persist(&families)
    }
}
