//! Parameter store backed by AWS Systems Manager Parameter Store.

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_ssm::types::ParameterType;
use tracing::debug;

use crate::aws::ClientFactory;
use crate::error::{OpsError, Result};

use super::{Parameter, ParameterKind, ParameterStore, WriteAck};

/// [`ParameterStore`] that reads and writes SSM parameters.
///
/// The store never constructs clients itself; every call borrows the shared
/// client from the factory, so connection settings are resolved exactly once
/// per process.
pub struct SsmStore {
    clients: Arc<ClientFactory>,
}

impl SsmStore {
    /// Creates a store over the given client factory.
    pub fn new(clients: Arc<ClientFactory>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl ParameterStore for SsmStore {
    async fn fetch(&self, name: &str, decrypt: bool) -> Result<Parameter> {
        debug!(name, decrypt, "fetching parameter");
        let client = self.clients.client().await;
        let output = client
            .get_parameter()
            .name(name)
            .with_decryption(decrypt)
            .send()
            .await
            .map_err(|err| {
                let service = err.into_service_error();
                if service.is_parameter_not_found() {
                    OpsError::ParameterNotFound(name.to_string())
                } else {
                    OpsError::Remote(service.to_string())
                }
            })?;

        let remote = output
            .parameter
            .ok_or_else(|| OpsError::Remote(format!("no parameter in response for {name}")))?;

        let kind = match remote.r#type {
            Some(ParameterType::SecureString) => ParameterKind::Secret,
            _ => ParameterKind::Plain,
        };
        let last_modified = remote
            .last_modified_date
            .and_then(|date| chrono::DateTime::from_timestamp(date.secs(), date.subsec_nanos()));

        Ok(Parameter {
            name: remote.name.unwrap_or_else(|| name.to_string()),
            value: remote.value.unwrap_or_default(),
            kind,
            version: Some(remote.version),
            last_modified,
            arn: remote.arn,
        })
    }

    async fn put(&self, name: &str, value: &str, kind: ParameterKind) -> Result<WriteAck> {
        debug!(name, ?kind, "writing parameter");
        let parameter_type = match kind {
            ParameterKind::Plain => ParameterType::String,
            ParameterKind::Secret => ParameterType::SecureString,
        };
        let client = self.clients.client().await;
        let output = client
            .put_parameter()
            .name(name)
            .value(value)
            .r#type(parameter_type)
            .overwrite(true)
            .send()
            .await
            .map_err(|err| OpsError::Remote(err.into_service_error().to_string()))?;

        Ok(WriteAck {
            version: output.version,
        })
    }
}
