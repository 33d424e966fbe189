use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::datetime_from_millis;

/// Domain model representing a family in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct Family {
    pub id: String,
    pub family_code: String,
    pub family_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub phone: String,
    /// References a `Location` by name; tolerated to dangle after a
    /// location delete
    pub location: String,
    pub debt_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Family {
    /// Generate a unique ID for a family
    pub fn generate_id() -> String {
        format!("family::{}", Uuid::new_v4())
    }

    pub fn to_dto(&self) -> shared::Family {
        shared::Family {
            id: self.id.clone(),
            family_code: self.family_code.clone(),
            family_name: self.family_name.clone(),
            father_name: self.father_name.clone(),
            mother_name: self.mother_name.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            debt_amount: self.debt_amount,
            created_at: self.created_at.timestamp_millis(),
        }
    }

    pub fn from_dto(dto: shared::Family) -> Self {
        Self {
            id: dto.id,
            family_code: dto.family_code,
            family_name: dto.family_name,
            father_name: dto.father_name,
            mother_name: dto.mother_name,
            phone: dto.phone,
            location: dto.location,
            debt_amount: dto.debt_amount,
            created_at: datetime_from_millis(dto.created_at),
        }
    }
}
