use chrono::Utc;
use tracing::{info, warn};

use crate::backend::domain::commands::comment::CreateCommentCommand;
use crate::backend::domain::errors::{DomainError, DomainResult};
use crate::backend::domain::models::comment::Comment;
use crate::backend::storage::json::{CommentRepository, FamilyRepository};
use crate::backend::storage::{CommentStorage, FamilyStorage};

/// Service for managing comments attached to families.
#[derive(Clone)]
pub struct CommentService {
    comment_repository: CommentRepository,
    family_repository: FamilyRepository,
}

impl CommentService {
    pub fn new(comment_repository: CommentRepository, family_repository: FamilyRepository) -> Self {
        Self {
            comment_repository,
            family_repository,
        }
    }

    /// Attach a comment to a family. The family must be alive at the moment
    /// of creation.
    pub fn create_comment(&self, command: CreateCommentCommand) -> DomainResult<Comment> {
        let description = command.description.trim();
        if description.is_empty() {
            return Err(DomainError::Validation(
                "comment text cannot be empty".to_string(),
            ));
        }
        if self.family_repository.get_family(&command.family_id)?.is_none() {
            return Err(DomainError::NotFound(format!(
                "family not found: {}",
                command.family_id
            )));
        }

        let comment = Comment {
            id: Comment::generate_id(),
            family_id: command.family_id,
            description: description.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.comment_repository.store_comment(&comment)?;
        info!("Created comment {} for family {}", comment.id, comment.family_id);
        Ok(comment)
    }

    pub fn list_comments(&self) -> DomainResult<Vec<Comment>> {
        Ok(self.comment_repository.list_comments()?)
    }

    /// Replace a comment's text and stamp `updated_at`. Unknown identifiers
    /// are a silent no-op (`Ok(None)`).
    pub fn update_comment(
        &self,
        comment_id: &str,
        description: &str,
    ) -> DomainResult<Option<Comment>> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::Validation(
                "comment text cannot be empty".to_string(),
            ));
        }

        let Some(mut comment) = self.comment_repository.get_comment(comment_id)? else {
            warn!("Update for unknown comment {} ignored", comment_id);
            return Ok(None);
        };

        comment.description = description.to_string();
        comment.updated_at = Some(Utc::now());
        self.comment_repository.update_comment(&comment)?;
        info!("Updated comment {}", comment.id);
        Ok(Some(comment))
    }

    /// Remove a comment. No cascade; unknown identifiers are a no-op.
    pub fn delete_comment(&self, comment_id: &str) -> DomainResult<bool> {
        let deleted = self.comment_repository.delete_comment(comment_id)?;
        if deleted {
            info!("Deleted comment {}", comment_id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::family::Family;
    use crate::backend::storage::json::JsonConnection;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn setup() -> (CommentService, String, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let family_repository = FamilyRepository::new(connection.clone());

        let family = Family {
            id: Family::generate_id(),
            family_code: "F-01".to_string(),
            family_name: "Cohen".to_string(),
            father_name: "David".to_string(),
            mother_name: "Rachel".to_string(),
            phone: "0501234567".to_string(),
            location: "Room A".to_string(),
            debt_amount: 0.0,
            created_at: Utc::now(),
        };
        family_repository.store_family(&family).unwrap();

        let service = CommentService::new(
            CommentRepository::new(connection),
            family_repository,
        );
        (service, family.id, temp_dir)
    }

    #[test]
    fn create_requires_non_empty_text() {
        let (service, family_id, _temp_dir) = setup();
        let result = service.create_comment(CreateCommentCommand {
            family_id,
            description: "   ".to_string(),
        });
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_fails_fast_for_missing_family() {
        let (service, _family_id, _temp_dir) = setup();
        let result = service.create_comment(CreateCommentCommand {
            family_id: "family::missing".to_string(),
            description: "note".to_string(),
        });
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[test]
    fn new_comment_has_no_updated_at() {
        let (service, family_id, _temp_dir) = setup();
        let comment = service
            .create_comment(CreateCommentCommand {
                family_id,
                description: "  call back  ".to_string(),
            })
            .unwrap();
        assert_eq!(comment.description, "call back");
        assert!(comment.updated_at.is_none());
    }

    #[test]
    fn editing_sets_updated_at_and_keeps_created_at() {
        let (service, family_id, _temp_dir) = setup();
        let comment = service
            .create_comment(CreateCommentCommand {
                family_id,
                description: "original".to_string(),
            })
            .unwrap();

        let first_edit = service
            .update_comment(&comment.id, "first edit")
            .unwrap()
            .unwrap();
        assert_eq!(first_edit.created_at, comment.created_at);
        let first_stamp = first_edit.updated_at.unwrap();

        let second_edit = service
            .update_comment(&comment.id, "second edit")
            .unwrap()
            .unwrap();
        assert!(second_edit.updated_at.unwrap() >= first_stamp);
    }

    #[test]
    fn update_unknown_comment_is_silent_noop() {
        let (service, _family_id, _temp_dir) = setup();
        assert!(service.update_comment("comment::missing", "text").unwrap().is_none());
    }

    #[test]
    fn delete_is_idempotent() {
        let (service, family_id, _temp_dir) = setup();
        let comment = service
            .create_comment(CreateCommentCommand {
                family_id,
                description: "note".to_string(),
            })
            .unwrap();

        assert!(service.delete_comment(&comment.id).unwrap());
        assert!(!service.delete_comment(&comment.id).unwrap());
    }
}
