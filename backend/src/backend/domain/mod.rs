//! # Domain Module
//!
//! Business logic for the kindergarten debt manager.
//!
//! ## Module Organization
//!
//! - **family_service**: Family CRUD with cascading deletes of owned records
//! - **comment_service**: Comment CRUD bounded by the owning family
//! - **notification_service**: Notification lifecycle and WhatsApp dispatch
//! - **location_service**: Location uniqueness and rename fan-out
//! - **settings_service**: WhatsApp template management
//! - **queries**: Pure filtered/sorted views over the collections
//! - **whatsapp**: Phone normalization and message composition
//! - **export_service**: Whole-store export/import
//! - **email_service**: One-shot SMTP relay
//!
//! ## Business Rules
//!
//! - Comments and notifications must reference a live family at creation
//! - Deleting a family removes every comment and notification it owns
//! - Location names are unique; renaming one moves every family with it
//! - Deleting a location does not touch the families that reference it
//! - A notification's sent flag never reverts to unsent

pub mod comment_service;
pub mod commands;
pub mod email_service;
pub mod errors;
pub mod export_service;
pub mod family_service;
pub mod location_service;
pub mod models;
pub mod mutation_lock;
pub mod notification_service;
pub mod queries;
pub mod settings_service;
pub mod whatsapp;

pub use comment_service::CommentService;
pub use email_service::EmailService;
pub use errors::{DomainError, DomainResult};
pub use export_service::ExportService;
pub use family_service::FamilyService;
pub use location_service::LocationService;
pub use mutation_lock::MutationLock;
pub use notification_service::NotificationService;
pub use settings_service::SettingsService;
