//! In-memory stores for testing.
//!
//! Both doubles keep the same section/key map as the file stores, count
//! their persistence calls, and support error injection to simulate failure
//! conditions in code that uses the store traits.

use crate::store::{ConfigStore, SecretStore};
use crate::{OpsError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

type Sections = HashMap<String, HashMap<String, String>>;

/// In-memory [`ConfigStore`] that records how often it was saved.
#[derive(Default)]
pub struct MemoryConfigStore {
    sections: RwLock<Sections>,
    saves: AtomicUsize,
    /// Error to return from `save()`.
    pub save_error: Option<OpsError>,
}

impl MemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store with a value.
    pub async fn seed(&self, section: &str, key: &str, value: &str) {
        self.set(section, key, value).await;
    }

    /// Number of times `save()` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn get(&self, section: &str, key: &str) -> Option<String> {
        let sections = self.sections.read().await;
        sections.get(section)?.get(key).cloned()
    }

    async fn set(&self, section: &str, key: &str, value: &str) {
        let mut sections = self.sections.write().await;
        sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    async fn save(&self) -> Result<()> {
        if let Some(ref err) = self.save_error {
            return Err(OpsError::Other(anyhow::anyhow!("{err}")));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory [`SecretStore`] with an assertion-friendly read path.
#[derive(Default)]
pub struct MemorySecretStore {
    sections: RwLock<Sections>,
    /// Error to return from `set()`.
    pub set_error: Option<OpsError>,
}

impl MemorySecretStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value under `section`/`key`, if any.
    ///
    /// The [`SecretStore`] contract has no read operation; this inherent
    /// method exists so tests can assert what was persisted.
    pub async fn value(&self, section: &str, key: &str) -> Option<String> {
        let sections = self.sections.read().await;
        sections.get(section)?.get(key).cloned()
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn set(&self, section: &str, key: &str, value: &str) -> Result<()> {
        if let Some(ref err) = self.set_error {
            return Err(OpsError::Other(anyhow::anyhow!("{err}")));
        }
        let mut sections = self.sections.write().await;
        sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
