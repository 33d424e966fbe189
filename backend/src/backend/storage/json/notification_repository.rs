use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::notification::Notification;
use crate::backend::storage::traits::NotificationStorage;

const SLOT: &str = "notifications";

/// JSON-slot notification repository.
#[derive(Clone)]
pub struct NotificationRepository {
    connection: Arc<JsonConnection>,
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl NotificationRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let stored: Vec<shared::Notification> = connection.read_slot(SLOT);
        debug!("Loaded {} notifications from slot", stored.len());
        let notifications = stored.into_iter().map(Notification::from_dto).collect();
        Self {
            connection,
            notifications: Arc::new(RwLock::new(notifications)),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<Notification>>> {
        self.notifications
            .read()
            .map_err(|_| anyhow!("notification collection lock poisoned"))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<Notification>>> {
        self.notifications
            .write()
            .map_err(|_| anyhow!("notification collection lock poisoned"))
    }

    fn persist(&self, notifications: &[Notification]) -> Result<()> {
        let dtos: Vec<shared::Notification> =
            notifications.iter().map(Notification::to_dto).collect();
        self.connection.write_slot(SLOT, &dtos)
    }
}

impl NotificationStorage for NotificationRepository {
    fn store_notification(&self, notification: &Notification) -> Result<()> {
        let mut notifications = self.write_guard()?;
        notifications.push(notification.clone());
        self.persist(&notifications)
    }

    fn get_notification(&self, notification_id: &str) -> Result<Option<Notification>> {
        let notifications = self.read_guard()?;
        Ok(notifications
            .iter()
            .find(|n| n.id == notification_id)
            .cloned())
    }

    fn list_notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.read_guard()?.clone())
    }

    fn update_notification(&self, notification: &Notification) -> Result<bool> {
        let mut notifications = self.write_guard()?;
        match notifications.iter_mut().find(|n| n.id == notification.id) {
            Some(existing) => {
                *existing = notification.clone();
                self.persist(&notifications)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_notification(&self, notification_id: &str) -> Result<bool> {
        let mut notifications = self.write_guard()?;
        let before = notifications.len();
        notifications.retain(|n| n.id != notification_id);
        if notifications.len() == before {
            return Ok(false);
        }
        self.persist(&notifications)?;
        Ok(true)
    }

    fn delete_notifications_for_family(&self, family_id: &str) -> Result<u32> {
        let mut notifications = self.write_guard()?;
        let before = notifications.len();
        notifications.retain(|n| n.family_id != family_id);
        let removed = (before - notifications.len()) as u32;
        if removed > 0 {
            self.persist(&notifications)?;
        }
        Ok(removed)
    }

    fn replace_all(&self, new_notifications: Vec<Notification>) -> Result<()> {
        let mut notifications = self.write_guard()?;
        *notifications = new_notifications;
        self.persist(&notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::notification::NotificationSource;
    use chrono::Utc;
    use tempfile::TempDir;

    fn setup() -> (NotificationRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (NotificationRepository::new(Arc::new(connection)), temp_dir)
    }

    fn sample(id: &str, family_id: &str) -> Notification {
        Notification {
            id: id.to_string(),
            family_id: family_id.to_string(),
            message: "please settle the balance".to_string(),
            source: NotificationSource::Direct,
            is_sent: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn update_flips_sent_flag() {
        let (repo, _temp_dir) = setup();
        let mut notification = sample("notification::1", "family::a");
        repo.store_notification(&notification).unwrap();

        notification.is_sent = true;
        assert!(repo.update_notification(&notification).unwrap());
        assert!(repo.get_notification("notification::1").unwrap().unwrap().is_sent);
    }

    #[test]
    fn cascade_delete_for_family() {
        let (repo, _temp_dir) = setup();
        repo.store_notification(&sample("notification::1", "family::a")).unwrap();
        repo.store_notification(&sample("notification::2", "family::b")).unwrap();

        assert_eq!(repo.delete_notifications_for_family("family::a").unwrap(), 1);
        assert_eq!(repo.list_notifications().unwrap().len(), 1);
    }
}
