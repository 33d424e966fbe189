/// Placeholder token substituted with the family name in greetings.
pub const FAMILY_NAME_TOKEN: &str = "{שם_משפחה}";

pub const DEFAULT_GREETING: &str = "שלום משפחת {שם_משפחה},";
pub const DEFAULT_SIGNATURE: &str = "בברכה,\nהנהלת הגן";

/// WhatsApp template settings. Stored fields are optional; the accessors
/// apply the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub whatsapp_greeting: Option<String>,
    pub whatsapp_signature: Option<String>,
}

impl Settings {
    pub fn greeting(&self) -> &str {
        self.whatsapp_greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }

    pub fn signature(&self) -> &str {
        self.whatsapp_signature
            .as_deref()
            .unwrap_or(DEFAULT_SIGNATURE)
    }

    pub fn to_dto(&self) -> shared::WhatsappSettings {
        shared::WhatsappSettings {
            whatsapp_greeting: self.whatsapp_greeting.clone(),
            whatsapp_signature: self.whatsapp_signature.clone(),
        }
    }

    pub fn from_dto(dto: shared::WhatsappSettings) -> Self {
        Self {
            whatsapp_greeting: dto.whatsapp_greeting,
            whatsapp_signature: dto.whatsapp_signature,
        }
    }
}
