//! # Storage Traits
//!
//! Abstraction seam between the domain services and the persistence
//! backend. The JSON-slot implementation is the only one in production,
//! but the services only ever see these traits.

use anyhow::Result;

use crate::backend::domain::models::comment::Comment;
use crate::backend::domain::models::family::Family;
use crate::backend::domain::models::location::Location;
use crate::backend::domain::models::notification::Notification;
use crate::backend::domain::models::settings::Settings;

/// Trait defining the interface for family storage operations
pub trait FamilyStorage: Send + Sync {
    /// Store a new family
    fn store_family(&self, family: &Family) -> Result<()>;

    /// Retrieve a specific family by ID
    fn get_family(&self, family_id: &str) -> Result<Option<Family>>;

    /// List all families in insertion order
    fn list_families(&self) -> Result<Vec<Family>>;

    /// Update an existing family
    /// Returns false when no family with this ID exists
    fn update_family(&self, family: &Family) -> Result<bool>;

    /// Delete a family by ID
    /// Returns false when no family with this ID exists
    fn delete_family(&self, family_id: &str) -> Result<bool>;

    /// Move every family at `old_name` to `new_name` (location rename fan-out)
    /// Returns the number of families updated
    fn rename_location_references(&self, old_name: &str, new_name: &str) -> Result<u32>;

    /// Replace the whole collection (import)
    fn replace_all(&self, families: Vec<Family>) -> Result<()>;
}

/// Trait defining the interface for comment storage operations
pub trait CommentStorage: Send + Sync {
    fn store_comment(&self, comment: &Comment) -> Result<()>;

    fn get_comment(&self, comment_id: &str) -> Result<Option<Comment>>;

    fn list_comments(&self) -> Result<Vec<Comment>>;

    /// Returns false when no comment with this ID exists
    fn update_comment(&self, comment: &Comment) -> Result<bool>;

    /// Returns false when no comment with this ID exists
    fn delete_comment(&self, comment_id: &str) -> Result<bool>;

    /// Cascade helper: remove every comment owned by the family
    /// Returns the number of comments removed
    fn delete_comments_for_family(&self, family_id: &str) -> Result<u32>;

    fn replace_all(&self, comments: Vec<Comment>) -> Result<()>;
}

/// Trait defining the interface for notification storage operations
pub trait NotificationStorage: Send + Sync {
    fn store_notification(&self, notification: &Notification) -> Result<()>;

    fn get_notification(&self, notification_id: &str) -> Result<Option<Notification>>;

    fn list_notifications(&self) -> Result<Vec<Notification>>;

    /// Returns false when no notification with this ID exists
    fn update_notification(&self, notification: &Notification) -> Result<bool>;

    /// Returns false when no notification with this ID exists
    fn delete_notification(&self, notification_id: &str) -> Result<bool>;

    /// Cascade helper: remove every notification owned by the family
    /// Returns the number of notifications removed
    fn delete_notifications_for_family(&self, family_id: &str) -> Result<u32>;

    fn replace_all(&self, notifications: Vec<Notification>) -> Result<()>;
}

/// Trait defining the interface for location storage operations
pub trait LocationStorage: Send + Sync {
    fn store_location(&self, location: &Location) -> Result<()>;

    fn get_location(&self, location_id: &str) -> Result<Option<Location>>;

    /// Find a location by its exact (case-sensitive) name
    fn get_location_by_name(&self, name: &str) -> Result<Option<Location>>;

    fn list_locations(&self) -> Result<Vec<Location>>;

    /// Returns false when no location with this ID exists
    fn update_location(&self, location: &Location) -> Result<bool>;

    /// Returns false when no location with this ID exists
    fn delete_location(&self, location_id: &str) -> Result<bool>;

    fn replace_all(&self, locations: Vec<Location>) -> Result<()>;
}

/// Trait defining the interface for the singleton settings record
pub trait SettingsStorage: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    fn store_settings(&self, settings: &Settings) -> Result<()>;
}
