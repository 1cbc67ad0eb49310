use crate::domain::email::EnabledEmails;
use crate::domain::ports::SettingsStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory settings store.
///
/// Starts out with every email type enabled. Used in tests and whenever no
/// settings file is configured.
#[derive(Default, Clone)]
pub struct InMemorySettingsStore {
    settings: Arc<RwLock<EnabledEmails>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> Result<EnabledEmails> {
        let settings = self.settings.read().await;
        Ok(settings.clone())
    }

    async fn save(&self, settings: &EnabledEmails) -> Result<()> {
        let mut stored = self.settings.write().await;
        *stored = settings.sanitized();
        Ok(())
    }
}
