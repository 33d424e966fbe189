use chrono::Utc;
use tracing::{info, warn};

use crate::backend::domain::commands::family::{
    CreateFamilyCommand, DeleteFamilyResult, UpdateFamilyCommand,
};
use crate::backend::domain::errors::DomainResult;
use crate::backend::domain::models::family::Family;
use crate::backend::domain::mutation_lock::MutationLock;
use crate::backend::storage::json::{CommentRepository, FamilyRepository, NotificationRepository};
use crate::backend::storage::{CommentStorage, FamilyStorage, NotificationStorage};

/// Service for managing families and the records they own.
#[derive(Clone)]
pub struct FamilyService {
    family_repository: FamilyRepository,
    comment_repository: CommentRepository,
    notification_repository: NotificationRepository,
    mutation_lock: MutationLock,
}

impl FamilyService {
    pub fn new(
        family_repository: FamilyRepository,
        comment_repository: CommentRepository,
        notification_repository: NotificationRepository,
        mutation_lock: MutationLock,
    ) -> Self {
        Self {
            family_repository,
            comment_repository,
            notification_repository,
            mutation_lock,
        }
    }

    /// Register a new family. `family_code` is a display value and is not
    /// checked for uniqueness.
    pub fn create_family(&self, command: CreateFamilyCommand) -> DomainResult<Family> {
        let family = Family {
            id: Family::generate_id(),
            family_code: command.family_code.trim().to_string(),
            family_name: command.family_name.trim().to_string(),
            father_name: command.father_name.trim().to_string(),
            mother_name: command.mother_name.trim().to_string(),
            phone: command.phone.trim().to_string(),
            location: command.location.trim().to_string(),
            debt_amount: command.debt_amount.unwrap_or(0.0),
            created_at: Utc::now(),
        };

        self.family_repository.store_family(&family)?;
        info!("Created family {} ({})", family.family_name, family.id);
        Ok(family)
    }

    pub fn get_family(&self, family_id: &str) -> DomainResult<Option<Family>> {
        Ok(self.family_repository.get_family(family_id)?)
    }

    pub fn list_families(&self) -> DomainResult<Vec<Family>> {
        Ok(self.family_repository.list_families()?)
    }

    /// Merge a patch over an existing family, preserving `id` and
    /// `created_at`. Unknown identifiers are a silent no-op (`Ok(None)`).
    pub fn update_family(
        &self,
        family_id: &str,
        patch: UpdateFamilyCommand,
    ) -> DomainResult<Option<Family>> {
        let Some(mut family) = self.family_repository.get_family(family_id)? else {
            warn!("Update for unknown family {} ignored", family_id);
            return Ok(None);
        };

        if let Some(family_code) = patch.family_code {
            family.family_code = family_code.trim().to_string();
        }
        if let Some(family_name) = patch.family_name {
            family.family_name = family_name.trim().to_string();
        }
        if let Some(father_name) = patch.father_name {
            family.father_name = father_name.trim().to_string();
        }
        if let Some(mother_name) = patch.mother_name {
            family.mother_name = mother_name.trim().to_string();
        }
        if let Some(phone) = patch.phone {
            family.phone = phone.trim().to_string();
        }
        if let Some(location) = patch.location {
            family.location = location.trim().to_string();
        }
        if let Some(debt_amount) = patch.debt_amount {
            family.debt_amount = debt_amount;
        }

        self.family_repository.update_family(&family)?;
        info!("Updated family {}", family.id);
        Ok(Some(family))
    }

    /// Delete a family and cascade to everything it owns. The whole cascade
    /// runs under the mutation lock; children are removed (and persisted)
    /// before the parent so a concurrent reader never sees orphans outliving
    /// the family.
    pub fn delete_family(&self, family_id: &str) -> DomainResult<DeleteFamilyResult> {
        let _guard = self.mutation_lock.acquire()?;
        if self.family_repository.get_family(family_id)?.is_none() {
            warn!("Delete for unknown family {} ignored", family_id);
            return Ok(DeleteFamilyResult {
                deleted: false,
                comments_removed: 0,
                notifications_removed: 0,
            });
        }

        let comments_removed = self.comment_repository.delete_comments_for_family(family_id)?;
        let notifications_removed = self
            .notification_repository
            .delete_notifications_for_family(family_id)?;
        self.family_repository.delete_family(family_id)?;

        info!(
            "Deleted family {} ({} comments, {} notifications cascaded)",
            family_id, comments_removed, notifications_removed
        );
        Ok(DeleteFamilyResult {
            deleted: true,
            comments_removed,
            notifications_removed,
        })
    }
}
