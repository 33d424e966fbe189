use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::datetime_from_millis;

/// Domain model for a named grouping of families. The `name` is the value
/// stored on `Family::location`, so renames fan out to families.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    /// Unique among live locations, case-sensitive
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn generate_id() -> String {
        format!("location::{}", Uuid::new_v4())
    }

    pub fn to_dto(&self) -> shared::Location {
        shared::Location {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at.timestamp_millis(),
        }
    }

    pub fn from_dto(dto: shared::Location) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            created_at: datetime_from_millis(dto.created_at),
        }
    }
}
