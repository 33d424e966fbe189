//! # JSON Storage Module
//!
//! File-based persistence using one JSON file per named slot, mirroring the
//! key/value layout the browser version of the app kept in local storage.
//!
//! ## Layout
//!
//! ```text
//! <data dir>/families.json       list of Family
//! <data dir>/comments.json       list of Comment
//! <data dir>/notifications.json  list of Notification
//! <data dir>/locations.json      list of Location
//! <data dir>/settings.json       one settings object
//! ```
//!
//! Reads of a missing or corrupt slot yield the empty default, never an
//! error. Writes are atomic (temp file + rename). Each repository keeps the
//! authoritative collection in memory and rewrites its slot after every
//! mutation.

pub mod comment_repository;
pub mod connection;
pub mod family_repository;
pub mod location_repository;
pub mod notification_repository;
pub mod settings_repository;

pub use comment_repository::CommentRepository;
pub use connection::JsonConnection;
pub use family_repository::FamilyRepository;
pub use location_repository::LocationRepository;
pub use notification_repository::NotificationRepository;
pub use settings_repository::SettingsRepository;
