use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::datetime_from_millis;

/// Where a notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSource {
    Direct,
    /// Created alongside a comment of identical text; the comment-send flow
    /// delivers immediately, so these are born sent.
    Comment,
}

impl NotificationSource {
    pub fn to_dto(self) -> shared::NotificationSource {
        match self {
            NotificationSource::Direct => shared::NotificationSource::Direct,
            NotificationSource::Comment => shared::NotificationSource::Comment,
        }
    }

    pub fn from_dto(dto: shared::NotificationSource) -> Self {
        match dto {
            shared::NotificationSource::Direct => NotificationSource::Direct,
            shared::NotificationSource::Comment => NotificationSource::Comment,
        }
    }
}

/// Domain model for an outbound message intended for a family.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub family_id: String,
    pub message: String,
    pub source: NotificationSource,
    /// Monotonic false -> true; never reverts
    pub is_sent: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn generate_id() -> String {
        format!("notification::{}", Uuid::new_v4())
    }

    pub fn to_dto(&self) -> shared::Notification {
        shared::Notification {
            id: self.id.clone(),
            family_id: self.family_id.clone(),
            message: self.message.clone(),
            source: self.source.to_dto(),
            is_sent: self.is_sent,
            created_at: self.created_at.timestamp_millis(),
        }
    }

    pub fn from_dto(dto: shared::Notification) -> Self {
        Self {
            id: dto.id,
            family_id: dto.family_id,
            message: dto.message,
            source: NotificationSource::from_dto(dto.source),
            is_sent: dto.is_sent,
            created_at: datetime_from_millis(dto.created_at),
        }
    }
}
