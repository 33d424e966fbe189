use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock};

use super::connection::JsonConnection;
use crate::backend::domain::models::settings::Settings;
use crate::backend::storage::traits::SettingsStorage;

const SLOT: &str = "settings";

/// JSON-slot repository for the singleton settings record.
#[derive(Clone)]
pub struct SettingsRepository {
    connection: Arc<JsonConnection>,
    settings: Arc<RwLock<Settings>>,
}

impl SettingsRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let stored: shared::WhatsappSettings = connection.read_slot(SLOT);
        Self {
            connection,
            settings: Arc::new(RwLock::new(Settings::from_dto(stored))),
        }
    }
}

impl SettingsStorage for SettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        self.settings
            .read()
            .map(|s| s.clone())
            .map_err(|_| anyhow!("settings lock poisoned"))
    }

    fn store_settings(&self, new_settings: &Settings) -> Result<()> {
        let mut settings = self
            .settings
            .write()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        *settings = new_settings.clone();
        self.connection.write_slot(SLOT, &settings.to_dto())
    }
}
