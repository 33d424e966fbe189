use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Handle on the data directory holding the JSON slot files.
#[derive(Debug)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Open (and create if needed) the data directory.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory)
            .with_context(|| format!("failed to create data directory {:?}", base_directory))?;
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_directory.join(format!("{slot}.json"))
    }

    /// Read a slot, returning the empty default when the file is missing,
    /// unreadable or does not parse.
    pub fn read_slot<T>(&self, slot: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.slot_path(slot);
        if !path.exists() {
            return T::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read slot {}: {}", slot, e);
                return T::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!("Slot {} holds invalid JSON, starting empty: {}", slot, e);
                T::default()
            }
        }
    }

    /// Write a slot atomically via a temp file and rename.
    pub fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        let path = self.slot_path(slot);
        let content = serde_json::to_string_pretty(value)
            .with_context(|| format!("failed to serialize slot {slot}"))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("failed to write slot {slot}"))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("failed to commit slot {slot}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (JsonConnection, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (connection, temp_dir)
    }

    #[test]
    fn missing_slot_reads_empty() {
        let (connection, _temp_dir) = setup();
        let values: Vec<String> = connection.read_slot("families");
        assert!(values.is_empty());
    }

    #[test]
    fn corrupt_slot_reads_empty() {
        let (connection, temp_dir) = setup();
        fs::write(temp_dir.path().join("families.json"), "{not json").unwrap();
        let values: Vec<String> = connection.read_slot("families");
        assert!(values.is_empty());
    }

    #[test]
    fn write_then_read_round_trips() {
        let (connection, _temp_dir) = setup();
        let values = vec!["a".to_string(), "b".to_string()];
        connection.write_slot("locations", &values).unwrap();

        let read: Vec<String> = connection.read_slot("locations");
        assert_eq!(read, values);
    }

    #[test]
    fn write_replaces_previous_content() {
        let (connection, _temp_dir) = setup();
        connection.write_slot("comments", &vec!["old".to_string()]).unwrap();
        connection.write_slot("comments", &Vec::<String>::new()).unwrap();

        let read: Vec<String> = connection.read_slot("comments");
        assert!(read.is_empty());
    }
}
