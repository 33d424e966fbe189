//! Wire-level types shared between the backend and any client.
//!
//! Field names serialize as `camelCase` and timestamps as epoch milliseconds
//! so that exported documents stay byte-compatible with data produced by
//! earlier versions of the debt manager.

use serde::{Deserialize, Serialize};

/// A household record carrying debt and contact information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub id: String,
    /// Display code, not guaranteed unique
    pub family_code: String,
    pub family_name: String,
    pub father_name: String,
    pub mother_name: String,
    /// Loosely formatted; normalized only when a WhatsApp link is built
    pub phone: String,
    /// Name of a `Location`; may dangle after a location delete
    pub location: String,
    pub debt_amount: f64,
    /// Creation time, epoch milliseconds
    pub created_at: i64,
}

/// A free-text annotation attached to one family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub family_id: String,
    pub description: String,
    pub created_at: i64,
    /// Set on every edit, `null` until the first one
    pub updated_at: Option<i64>,
}

/// Provenance of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSource {
    /// Composed in the notifications panel
    Direct,
    /// Created alongside a comment of identical text
    Comment,
}

/// An outbound message for a family with a sent/unsent status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub family_id: String,
    pub message: String,
    pub source: NotificationSource,
    /// Monotonic: once true, never reverts
    pub is_sent: bool,
    pub created_at: i64,
}

/// A named grouping families may belong to, referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

/// WhatsApp message template settings. Absent fields fall back to the
/// built-in Hebrew defaults at compose time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsappSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_signature: Option<String>,
}

/// Whole-store export document. `version` is currently always 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub version: u32,
    /// ISO-8601 timestamp of the export
    pub export_date: String,
    pub families: Vec<Family>,
    pub comments: Vec<Comment>,
    pub notifications: Vec<Notification>,
    pub locations: Vec<Location>,
    pub settings: WhatsappSettings,
}

/// Import document. Collections are replaced wholesale if and only if the
/// corresponding key is present; absent keys leave local data untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload {
    pub version: Option<u32>,
    pub export_date: Option<String>,
    pub families: Option<Vec<Family>>,
    pub comments: Option<Vec<Comment>>,
    pub notifications: Option<Vec<Notification>>,
    pub locations: Option<Vec<Location>>,
    pub settings: Option<WhatsappSettings>,
}

/// Summary of what an import replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub families: Option<usize>,
    pub comments: Option<usize>,
    pub notifications: Option<usize>,
    pub locations: Option<usize>,
    pub settings_replaced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamilyRequest {
    pub family_code: String,
    pub family_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub phone: String,
    pub location: String,
    pub debt_amount: Option<f64>,
}

/// Patch request; only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFamilyRequest {
    pub family_code: Option<String>,
    pub family_name: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub debt_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub family_id: String,
    pub message: String,
    #[serde(default = "default_notification_source")]
    pub source: NotificationSource,
}

fn default_notification_source() -> NotificationSource {
    NotificationSource::Direct
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameLocationRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub name: String,
}

/// Outcome of a cascading family delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFamilyResponse {
    pub deleted: bool,
    pub comments_removed: u32,
    pub notifications_removed: u32,
}

/// Result of a WhatsApp dispatch: the deep link the client should open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsappSendResponse {
    pub url: String,
    pub notification: Notification,
}

/// Aggregates shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_families: usize,
    pub total_debt: f64,
    pub total_locations: usize,
    pub pending_notifications: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub to: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub success: bool,
}

/// Reported by `GET /api/health`; has no side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub smtp: String,
    pub admin_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}
