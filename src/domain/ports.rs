use super::email::EnabledEmails;
use crate::error::Result;
use async_trait::async_trait;

/// Persistence port for the per-email enablement map.
///
/// The map lives in the host's configuration store; implementations decide where
/// that is (a file, memory for tests).
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> Result<EnabledEmails>;
    async fn save(&self, settings: &EnabledEmails) -> Result<()>;
}

pub type SettingsStoreBox = Box<dyn SettingsStore>;
