use crate::domain::email::EnabledEmails;
use crate::domain::ports::SettingsStore;
use crate::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Settings persisted as a JSON file.
///
/// Loading fails open: a missing file means the defaults, and an unreadable map
/// is replaced by the defaults rather than blocking email rendering.
#[derive(Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn load(&self) -> Result<EnabledEmails> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Ok(EnabledEmails::default());
            }
            Err(error) => return Err(error.into()),
        };
        match serde_json::from_slice::<EnabledEmails>(&raw) {
            Ok(settings) => Ok(settings),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "unreadable settings, using defaults");
                Ok(EnabledEmails::default())
            }
        }
    }

    async fn save(&self, settings: &EnabledEmails) -> Result<()> {
        let json = serde_json::to_vec_pretty(&settings.sanitized())?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
