//! Whole-store export and import.
//!
//! Export snapshots every collection plus the settings into a single JSON
//! document. Import replaces collections wholesale for each key present in
//! the document and leaves absent keys untouched. A document that fails to
//! parse mutates nothing.

use chrono::Utc;
use shared::{ExportPayload, ImportPayload, ImportSummary};
use tracing::{info, warn};

use crate::backend::domain::errors::{DomainError, DomainResult};
use crate::backend::domain::models::comment::Comment;
use crate::backend::domain::models::family::Family;
use crate::backend::domain::models::location::Location;
use crate::backend::domain::models::notification::Notification;
use crate::backend::domain::models::settings::Settings;
use crate::backend::storage::json::{
    CommentRepository, FamilyRepository, LocationRepository, NotificationRepository,
    SettingsRepository,
};
use crate::backend::storage::{
    CommentStorage, FamilyStorage, LocationStorage, NotificationStorage, SettingsStorage,
};

const EXPORT_VERSION: u32 = 1;

/// Service for exporting, importing and wiping the whole store.
#[derive(Clone)]
pub struct ExportService {
    family_repository: FamilyRepository,
    comment_repository: CommentRepository,
    notification_repository: NotificationRepository,
    location_repository: LocationRepository,
    settings_repository: SettingsRepository,
}

impl ExportService {
    pub fn new(
        family_repository: FamilyRepository,
        comment_repository: CommentRepository,
        notification_repository: NotificationRepository,
        location_repository: LocationRepository,
        settings_repository: SettingsRepository,
    ) -> Self {
        Self {
            family_repository,
            comment_repository,
            notification_repository,
            location_repository,
            settings_repository,
        }
    }

    /// Snapshot every collection into one export document.
    pub fn export_data(&self) -> DomainResult<ExportPayload> {
        let payload = ExportPayload {
            version: EXPORT_VERSION,
            export_date: Utc::now().to_rfc3339(),
            families: self
                .family_repository
                .list_families()?
                .iter()
                .map(Family::to_dto)
                .collect(),
            comments: self
                .comment_repository
                .list_comments()?
                .iter()
                .map(Comment::to_dto)
                .collect(),
            notifications: self
                .notification_repository
                .list_notifications()?
                .iter()
                .map(Notification::to_dto)
                .collect(),
            locations: self
                .location_repository
                .list_locations()?
                .iter()
                .map(Location::to_dto)
                .collect(),
            settings: self.settings_repository.get_settings()?.to_dto(),
        };
        info!(
            "Exported {} families, {} comments, {} notifications, {} locations",
            payload.families.len(),
            payload.comments.len(),
            payload.notifications.len(),
            payload.locations.len()
        );
        Ok(payload)
    }

    /// Suggested download name for an export taken now.
    pub fn export_filename(&self) -> String {
        format!("kindergarten-data-{}.json", Utc::now().format("%Y-%m-%d"))
    }

    /// Parse an export document and replace every collection whose key is
    /// present. Parse failures leave the store untouched.
    pub fn import_data(&self, raw: &str) -> DomainResult<ImportSummary> {
        let payload: ImportPayload = serde_json::from_str(raw).map_err(|e| {
            warn!("Rejected unparseable import document: {e}");
            DomainError::Format(e.to_string())
        })?;

        let mut summary = ImportSummary {
            families: None,
            comments: None,
            notifications: None,
            locations: None,
            settings_replaced: false,
        };

        if let Some(families) = payload.families {
            summary.families = Some(families.len());
            self.family_repository
                .replace_all(families.into_iter().map(Family::from_dto).collect())?;
        }
        if let Some(comments) = payload.comments {
            summary.comments = Some(comments.len());
            self.comment_repository
                .replace_all(comments.into_iter().map(Comment::from_dto).collect())?;
        }
        if let Some(notifications) = payload.notifications {
            summary.notifications = Some(notifications.len());
            self.notification_repository
                .replace_all(notifications.into_iter().map(Notification::from_dto).collect())?;
        }
        if let Some(locations) = payload.locations {
            summary.locations = Some(locations.len());
            self.location_repository
                .replace_all(locations.into_iter().map(Location::from_dto).collect())?;
        }
        if let Some(settings) = payload.settings {
            summary.settings_replaced = true;
            self.settings_repository
                .store_settings(&Settings::from_dto(settings))?;
        }

        info!(
            "Imported data (families: {:?}, comments: {:?}, notifications: {:?}, locations: {:?}, settings: {})",
            summary.families,
            summary.comments,
            summary.notifications,
            summary.locations,
            summary.settings_replaced
        );
        Ok(summary)
    }

    /// Empty every collection and reset the settings to the defaults.
    pub fn clear_all_data(&self) -> DomainResult<()> {
        self.comment_repository.replace_all(Vec::new())?;
        self.notification_repository.replace_all(Vec::new())?;
        self.family_repository.replace_all(Vec::new())?;
        self.location_repository.replace_all(Vec::new())?;
        self.settings_repository.store_settings(&Settings::default())?;
        info!("Cleared all data");
        Ok(())
    }
}
