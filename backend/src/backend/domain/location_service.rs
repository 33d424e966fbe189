use chrono::Utc;
use tracing::{info, warn};

use crate::backend::domain::errors::{DomainError, DomainResult};
use crate::backend::domain::models::location::Location;
use crate::backend::domain::mutation_lock::MutationLock;
use crate::backend::domain::queries;
use crate::backend::storage::json::{FamilyRepository, LocationRepository};
use crate::backend::storage::{FamilyStorage, LocationStorage};

/// Service for the location catalogue. Families reference locations by name,
/// so renames fan out and deletes may leave references dangling.
#[derive(Clone)]
pub struct LocationService {
    location_repository: LocationRepository,
    family_repository: FamilyRepository,
    mutation_lock: MutationLock,
}

impl LocationService {
    pub fn new(
        location_repository: LocationRepository,
        family_repository: FamilyRepository,
        mutation_lock: MutationLock,
    ) -> Self {
        Self {
            location_repository,
            family_repository,
            mutation_lock,
        }
    }

    /// Add a location. Names are trimmed and must be unique (case-sensitive)
    /// among live locations. The uniqueness check and the insert run under
    /// the mutation lock so concurrent creates cannot both pass the check.
    pub fn create_location(&self, name: &str) -> DomainResult<Location> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "location name cannot be empty".to_string(),
            ));
        }

        let _guard = self.mutation_lock.acquire()?;
        if self.location_repository.get_location_by_name(name)?.is_some() {
            return Err(DomainError::Duplicate(format!(
                "location already exists: {name}"
            )));
        }

        let location = Location {
            id: Location::generate_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.location_repository.store_location(&location)?;
        info!("Created location {} ({})", location.name, location.id);
        Ok(location)
    }

    /// All locations sorted by name.
    pub fn list_locations(&self) -> DomainResult<Vec<Location>> {
        let mut locations = self.location_repository.list_locations()?;
        queries::sort_locations_by_name(&mut locations);
        Ok(locations)
    }

    /// Rename a location and move every family referencing the old name.
    /// The whole fan-out runs under the mutation lock; families are updated
    /// before the location record so a failure midway never strands families
    /// on a name no location carries.
    ///
    /// Unknown identifiers are a silent no-op (`Ok(None)`); renaming to the
    /// current name succeeds without touching anything.
    pub fn rename_location(&self, location_id: &str, new_name: &str) -> DomainResult<Option<Location>> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(DomainError::Validation(
                "location name cannot be empty".to_string(),
            ));
        }

        let _guard = self.mutation_lock.acquire()?;
        let Some(mut location) = self.location_repository.get_location(location_id)? else {
            warn!("Rename for unknown location {} ignored", location_id);
            return Ok(None);
        };
        if location.name == new_name {
            return Ok(Some(location));
        }
        if let Some(other) = self.location_repository.get_location_by_name(new_name)? {
            if other.id != location.id {
                return Err(DomainError::Duplicate(format!(
                    "location already exists: {new_name}"
                )));
            }
        }

        let moved = self
            .family_repository
            .rename_location_references(&location.name, new_name)?;
        location.name = new_name.to_string();
        self.location_repository.update_location(&location)?;

        info!(
            "Renamed location {} to {} ({} families moved)",
            location.id, location.name, moved
        );
        Ok(Some(location))
    }

    /// Remove a location. Families referencing it keep the now-dangling
    /// name; unknown identifiers are a no-op.
    pub fn delete_location(&self, location_id: &str) -> DomainResult<bool> {
        let deleted = self.location_repository.delete_location(location_id)?;
        if deleted {
            info!("Deleted location {}", location_id);
        }
        Ok(deleted)
    }
}
