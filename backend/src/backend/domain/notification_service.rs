use chrono::Utc;
use tracing::{info, warn};

use crate::backend::domain::commands::notification::CreateNotificationCommand;
use crate::backend::domain::errors::{DomainError, DomainResult};
use crate::backend::domain::models::family::Family;
use crate::backend::domain::models::notification::{Notification, NotificationSource};
use crate::backend::domain::whatsapp;
use crate::backend::storage::json::{
    FamilyRepository, NotificationRepository, SettingsRepository,
};
use crate::backend::storage::{FamilyStorage, NotificationStorage, SettingsStorage};

/// Outcome of a WhatsApp dispatch: the deep link plus the (now sent)
/// notification record.
#[derive(Debug, Clone)]
pub struct WhatsappDispatch {
    pub url: String,
    pub notification: Notification,
}

/// Service for the notification lifecycle and WhatsApp dispatch.
#[derive(Clone)]
pub struct NotificationService {
    notification_repository: NotificationRepository,
    family_repository: FamilyRepository,
    settings_repository: SettingsRepository,
}

impl NotificationService {
    pub fn new(
        notification_repository: NotificationRepository,
        family_repository: FamilyRepository,
        settings_repository: SettingsRepository,
    ) -> Self {
        Self {
            notification_repository,
            family_repository,
            settings_repository,
        }
    }

    /// Record a notification for a family. Comment-sourced notifications are
    /// born sent because the comment-send flow delivers in the same action.
    pub fn create_notification(
        &self,
        command: CreateNotificationCommand,
    ) -> DomainResult<Notification> {
        let message = command.message.trim();
        if message.is_empty() {
            return Err(DomainError::Validation(
                "notification message cannot be empty".to_string(),
            ));
        }
        if self.family_repository.get_family(&command.family_id)?.is_none() {
            return Err(DomainError::NotFound(format!(
                "family not found: {}",
                command.family_id
            )));
        }

        let notification = Notification {
            id: Notification::generate_id(),
            family_id: command.family_id,
            message: message.to_string(),
            source: command.source,
            is_sent: matches!(command.source, NotificationSource::Comment),
            created_at: Utc::now(),
        };

        self.notification_repository.store_notification(&notification)?;
        info!(
            "Created {:?} notification {} for family {}",
            notification.source, notification.id, notification.family_id
        );
        Ok(notification)
    }

    pub fn list_notifications(&self) -> DomainResult<Vec<Notification>> {
        Ok(self.notification_repository.list_notifications()?)
    }

    /// Flip the sent flag to true. Already-sent and unknown notifications
    /// are no-ops; the flag never reverts.
    pub fn mark_notification_sent(&self, notification_id: &str) -> DomainResult<Option<Notification>> {
        let Some(mut notification) = self.notification_repository.get_notification(notification_id)?
        else {
            warn!("Mark-sent for unknown notification {} ignored", notification_id);
            return Ok(None);
        };

        if !notification.is_sent {
            notification.is_sent = true;
            self.notification_repository.update_notification(&notification)?;
            info!("Marked notification {} as sent", notification.id);
        }
        Ok(Some(notification))
    }

    /// Remove a notification. Unknown identifiers are a no-op.
    pub fn delete_notification(&self, notification_id: &str) -> DomainResult<bool> {
        let deleted = self.notification_repository.delete_notification(notification_id)?;
        if deleted {
            info!("Deleted notification {}", notification_id);
        }
        Ok(deleted)
    }

    /// Dispatch a notification over WhatsApp: mark it sent and return the
    /// deep link the client should open. Fails when the notification or its
    /// family no longer exists.
    pub fn send_notification_whatsapp(&self, notification_id: &str) -> DomainResult<WhatsappDispatch> {
        let notification = self
            .notification_repository
            .get_notification(notification_id)?
            .ok_or_else(|| {
                DomainError::NotFound(format!("notification not found: {notification_id}"))
            })?;
        let family = self
            .family_repository
            .get_family(&notification.family_id)?
            .ok_or_else(|| {
                DomainError::NotFound(format!("family not found: {}", notification.family_id))
            })?;

        // Mark before handing out the link, matching the one-shot send flow
        let notification = self
            .mark_notification_sent(&notification.id)?
            .unwrap_or(notification);

        let url = self.compose_link(&family, &notification.message)?;
        info!("Dispatching notification {} to family {}", notification.id, family.id);
        Ok(WhatsappDispatch { url, notification })
    }

    /// Build a `wa.me` link for an arbitrary message to a family, using the
    /// stored greeting/signature template.
    pub fn compose_link(&self, family: &Family, message: &str) -> DomainResult<String> {
        let settings = self.settings_repository.get_settings()?;
        let full_message = whatsapp::compose_with_settings(&settings, &family.family_name, message);
        Ok(whatsapp::wa_link(&family.phone, &full_message))
    }
}
