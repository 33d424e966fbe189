use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::datetime_from_millis;

/// Domain model for a free-text annotation owned by exactly one family.
/// A comment never moves to a different family; its lifetime is bounded by
/// the owning family's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub family_id: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// `Some` if and only if at least one edit has occurred
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn generate_id() -> String {
        format!("comment::{}", Uuid::new_v4())
    }

    pub fn to_dto(&self) -> shared::Comment {
        shared::Comment {
            id: self.id.clone(),
            family_id: self.family_id.clone(),
            description: self.description.clone(),
            created_at: self.created_at.timestamp_millis(),
            updated_at: self.updated_at.map(|t| t.timestamp_millis()),
        }
    }

    pub fn from_dto(dto: shared::Comment) -> Self {
        Self {
            id: dto.id,
            family_id: dto.family_id,
            description: dto.description,
            created_at: datetime_from_millis(dto.created_at),
            updated_at: dto.updated_at.map(datetime_from_millis),
        }
    }
}
