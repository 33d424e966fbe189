//! Domain-level command and result types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod family {
    /// Input for registering a new family.
    #[derive(Debug, Clone)]
    pub struct CreateFamilyCommand {
        pub family_code: String,
        pub family_name: String,
        pub father_name: String,
        pub mother_name: String,
        pub phone: String,
        pub location: String,
        pub debt_amount: Option<f64>,
    }

    /// Patch for an existing family; only `Some` fields are applied.
    /// `id` and `created_at` are never touched.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateFamilyCommand {
        pub family_code: Option<String>,
        pub family_name: Option<String>,
        pub father_name: Option<String>,
        pub mother_name: Option<String>,
        pub phone: Option<String>,
        pub location: Option<String>,
        pub debt_amount: Option<f64>,
    }

    /// Outcome of a cascading family delete.
    #[derive(Debug, Clone)]
    pub struct DeleteFamilyResult {
        pub deleted: bool,
        pub comments_removed: u32,
        pub notifications_removed: u32,
    }
}

pub mod comment {
    /// Input for attaching a comment to a family.
    #[derive(Debug, Clone)]
    pub struct CreateCommentCommand {
        pub family_id: String,
        pub description: String,
    }
}

pub mod notification {
    use crate::backend::domain::models::notification::NotificationSource;

    /// Input for recording a notification.
    #[derive(Debug, Clone)]
    pub struct CreateNotificationCommand {
        pub family_id: String,
        pub message: String,
        pub source: NotificationSource,
    }
}

pub mod settings {
    /// New template values; empty-after-trim fields reset to the defaults.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateSettingsCommand {
        pub whatsapp_greeting: Option<String>,
        pub whatsapp_signature: Option<String>,
    }
}
