//! Parameter data model and the store abstraction over it.

use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How a parameter value is held at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Stored in the clear.
    Plain,
    /// Stored encrypted; reading it back requires decryption.
    Secret,
}

/// A stored parameter and its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    /// Fully qualified name, including the namespace root.
    pub name: String,
    /// Current value. Still ciphertext when a secret is fetched without
    /// decryption.
    pub value: String,
    /// Whether the value is held in the clear or encrypted.
    pub kind: ParameterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

/// Acknowledgement of a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WriteAck {
    /// Version the store assigned to the written value.
    pub version: i64,
}

/// Storage backend for deployment parameters.
///
/// Implementations receive fully qualified names; namespacing and name
/// validation happen in [`ParamService`](super::ParamService) before any
/// call reaches a store.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetches a parameter by fully qualified name.
    ///
    /// `decrypt` asks the store to return plaintext for encrypted values;
    /// it has no effect on values stored in the clear.
    async fn fetch(&self, name: &str, decrypt: bool) -> Result<Parameter>;

    /// Writes a parameter, overwriting any existing value.
    async fn put(&self, name: &str, value: &str, kind: ParameterKind) -> Result<WriteAck>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_serializes_without_absent_metadata() {
        let parameter = Parameter {
            name: "/caravel/app/url".to_string(),
            value: "https://example.test".to_string(),
            kind: ParameterKind::Plain,
            version: Some(3),
            last_modified: None,
            arn: None,
        };

        let json = serde_json::to_value(&parameter).unwrap();
        assert_eq!(json["name"], "/caravel/app/url");
        assert_eq!(json["kind"], "plain");
        assert_eq!(json["version"], 3);
        assert!(json.get("last_modified").is_none());
        assert!(json.get("arn").is_none());
    }

    #[test]
    fn test_secret_kind_serializes_lowercase() {
        let json = serde_json::to_value(ParameterKind::Secret).unwrap();
        assert_eq!(json, "secret");
    }
}
