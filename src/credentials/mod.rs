//! Per-provider API key storage
//!
//! Credentials live in a process-wide key-value store keyed
//! `"<provider>-api-key"`, plaintext, overwritten on save, never expiring.
//! The store is an injected interface so tests can substitute the in-memory
//! implementation for the on-disk one.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

use crate::chat::provider::ProviderId;

pub trait CredentialStore: Send + Sync {
    /// Stored secret for the provider, if any.
    fn load(&self, provider: ProviderId) -> Result<Option<String>>;

    /// Persist the secret under the provider's key, replacing any previous
    /// value. Emptiness checks happen in the selector, not here.
    fn save(&self, provider: ProviderId, secret: &str) -> Result<()>;
}

/// TOML-file-backed store: one table of `"<provider>-api-key" = secret`
/// entries, no encryption.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cropguard")
            .join("credentials.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self, provider: ProviderId) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries.get(&provider.storage_key()).cloned())
    }

    fn save(&self, provider: ProviderId, secret: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(provider.storage_key(), secret.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let rendered = toml::to_string(&entries).context("serializing credentials")?;
        std::fs::write(&self.path, rendered)
            .with_context(|| format!("writing {}", self.path.display()))?;

        debug!("saved {} credential", provider);
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self, provider: ProviderId) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(&provider.storage_key()).cloned())
    }

    fn save(&self, provider: ProviderId, secret: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(provider.storage_key(), secret.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.toml"));

        assert_eq!(store.load(ProviderId::Chatgpt).unwrap(), None);

        store.save(ProviderId::Chatgpt, "sk-first").unwrap();
        assert_eq!(
            store.load(ProviderId::Chatgpt).unwrap().as_deref(),
            Some("sk-first")
        );

        store.save(ProviderId::Chatgpt, "sk-second").unwrap();
        assert_eq!(
            store.load(ProviderId::Chatgpt).unwrap().as_deref(),
            Some("sk-second")
        );
    }

    #[test]
    fn providers_do_not_share_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.toml"));

        store.save(ProviderId::Chatgpt, "sk-openai").unwrap();
        store.save(ProviderId::Deepseek, "sk-deepseek").unwrap();

        assert_eq!(
            store.load(ProviderId::Chatgpt).unwrap().as_deref(),
            Some("sk-openai")
        );
        assert_eq!(
            store.load(ProviderId::Deepseek).unwrap().as_deref(),
            Some("sk-deepseek")
        );
    }

    #[test]
    fn memory_store_behaves_like_the_file_store() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load(ProviderId::Deepseek).unwrap(), None);

        store.save(ProviderId::Deepseek, "sk-test").unwrap();
        assert_eq!(
            store.load(ProviderId::Deepseek).unwrap().as_deref(),
            Some("sk-test")
        );
        assert_eq!(store.load(ProviderId::Chatgpt).unwrap(), None);
    }
}
