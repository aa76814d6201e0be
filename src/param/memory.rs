//! In-memory parameter store for tests and offline development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{OpsError, Result};

use super::{Parameter, ParameterKind, ParameterStore, WriteAck};

#[derive(Debug, Clone)]
struct StoredParameter {
    value: String,
    kind: ParameterKind,
    version: i64,
}

/// [`ParameterStore`] held entirely in memory.
///
/// Mirrors the versioning behavior of the real store: the first write of a
/// name gets version 1 and each overwrite increments it. The error fields
/// inject failures for exercising remote-failure paths.
#[derive(Default)]
pub struct MemoryStore {
    parameters: RwLock<HashMap<String, StoredParameter>>,
    /// When set, every fetch fails with this error's message.
    pub fetch_error: Option<OpsError>,
    /// When set, every put fails with this error's message.
    pub put_error: Option<OpsError>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind recorded for `name`, if it has been written.
    pub async fn kind_of(&self, name: &str) -> Option<ParameterKind> {
        self.parameters
            .read()
            .await
            .get(name)
            .map(|stored| stored.kind)
    }

    /// Number of stored parameters.
    pub async fn len(&self) -> usize {
        self.parameters.read().await.len()
    }

    /// Whether the store holds no parameters.
    pub async fn is_empty(&self) -> bool {
        self.parameters.read().await.is_empty()
    }
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn fetch(&self, name: &str, _decrypt: bool) -> Result<Parameter> {
        if let Some(err) = &self.fetch_error {
            return Err(OpsError::Other(anyhow::anyhow!("{err}")));
        }
        let parameters = self.parameters.read().await;
        let stored = parameters
            .get(name)
            .ok_or_else(|| OpsError::ParameterNotFound(name.to_string()))?;
        Ok(Parameter {
            name: name.to_string(),
            value: stored.value.clone(),
            kind: stored.kind,
            version: Some(stored.version),
            last_modified: Some(Utc::now()),
            arn: None,
        })
    }

    async fn put(&self, name: &str, value: &str, kind: ParameterKind) -> Result<WriteAck> {
        if let Some(err) = &self.put_error {
            return Err(OpsError::Other(anyhow::anyhow!("{err}")));
        }
        let mut parameters = self.parameters.write().await;
        let version = parameters.get(name).map_or(1, |stored| stored.version + 1);
        parameters.insert(
            name.to_string(),
            StoredParameter {
                value: value.to_string(),
                kind,
                version,
            },
        );
        Ok(WriteAck { version })
    }
}
