use tracing::info;

use crate::backend::domain::commands::settings::UpdateSettingsCommand;
use crate::backend::domain::errors::DomainResult;
use crate::backend::domain::models::settings::Settings;
use crate::backend::storage::json::SettingsRepository;
use crate::backend::storage::SettingsStorage;

/// Service for the singleton WhatsApp template settings.
#[derive(Clone)]
pub struct SettingsService {
    settings_repository: SettingsRepository,
}

impl SettingsService {
    pub fn new(settings_repository: SettingsRepository) -> Self {
        Self { settings_repository }
    }

    pub fn get_settings(&self) -> DomainResult<Settings> {
        Ok(self.settings_repository.get_settings()?)
    }

    /// Store new template values. Fields left out of the command keep their
    /// current value; a present but blank value resets that field so the
    /// built-in default applies again.
    pub fn update_settings(&self, command: UpdateSettingsCommand) -> DomainResult<Settings> {
        let mut settings = self.settings_repository.get_settings()?;

        if let Some(greeting) = command.whatsapp_greeting {
            settings.whatsapp_greeting = non_blank(greeting);
        }
        if let Some(signature) = command.whatsapp_signature {
            settings.whatsapp_signature = non_blank(signature);
        }

        self.settings_repository.store_settings(&settings)?;
        info!("Updated WhatsApp template settings");
        Ok(settings)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::settings::{DEFAULT_GREETING, DEFAULT_SIGNATURE};
    use crate::backend::storage::json::JsonConnection;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn setup() -> (SettingsService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        (SettingsService::new(SettingsRepository::new(connection)), temp_dir)
    }

    #[test]
    fn fresh_store_serves_defaults() {
        let (service, _temp_dir) = setup();
        let settings = service.get_settings().unwrap();
        assert_eq!(settings.greeting(), DEFAULT_GREETING);
        assert_eq!(settings.signature(), DEFAULT_SIGNATURE);
    }

    #[test]
    fn update_overrides_and_omitted_fields_survive() {
        let (service, _temp_dir) = setup();
        service
            .update_settings(UpdateSettingsCommand {
                whatsapp_greeting: Some("  היי {שם_משפחה}  ".to_string()),
                whatsapp_signature: None,
            })
            .unwrap();

        let settings = service.get_settings().unwrap();
        assert_eq!(settings.greeting(), "היי {שם_משפחה}");
        assert_eq!(settings.signature(), DEFAULT_SIGNATURE);
    }

    #[test]
    fn blank_value_resets_to_default() {
        let (service, _temp_dir) = setup();
        service
            .update_settings(UpdateSettingsCommand {
                whatsapp_greeting: Some("custom".to_string()),
                whatsapp_signature: Some("sig".to_string()),
            })
            .unwrap();
        service
            .update_settings(UpdateSettingsCommand {
                whatsapp_greeting: Some("   ".to_string()),
                whatsapp_signature: None,
            })
            .unwrap();

        let settings = service.get_settings().unwrap();
        assert_eq!(settings.greeting(), DEFAULT_GREETING);
        assert_eq!(settings.signature(), "sig");
    }
}
