//! Parameter operations with naming rules applied.

use std::sync::Arc;

use crate::error::Result;
use crate::validation::validate_parameter_name;

use super::{Parameter, ParameterKind, ParameterStore, WriteAck};

/// Validates and namespaces parameter names, then delegates to a store.
///
/// Every name accepted here is rewritten under the tool's namespace root
/// before it reaches the backend, so callers can never touch parameters
/// outside it.
pub struct ParamService {
    store: Arc<dyn ParameterStore>,
}

impl ParamService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self { store }
    }

    /// Fetches the parameter at `name`.
    ///
    /// `decrypt` requests plaintext for encrypted values.
    pub async fn get(&self, name: &str, decrypt: bool) -> Result<Parameter> {
        let qualified = validate_parameter_name(name)?;
        self.store.fetch(&qualified, decrypt).await
    }

    /// Writes `value` at `name`, overwriting any existing value.
    ///
    /// `secret` selects encrypted storage.
    pub async fn set(&self, name: &str, value: &str, secret: bool) -> Result<WriteAck> {
        let qualified = validate_parameter_name(name)?;
        let kind = if secret {
            ParameterKind::Secret
        } else {
            ParameterKind::Plain
        };
        self.store.put(&qualified, value, kind).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpsError;
    use crate::param::MemoryStore;

    fn service() -> (ParamService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (ParamService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_set_qualifies_names_under_the_namespace_root() {
        let (service, store) = service();

        service.set("/app/url", "https://example.test", false).await.unwrap();
        service.set("release", "1.4.0", false).await.unwrap();

        assert_eq!(store.kind_of("/caravel/app/url").await, Some(ParameterKind::Plain));
        assert_eq!(store.kind_of("/caravel/release").await, Some(ParameterKind::Plain));
    }

    #[tokio::test]
    async fn test_get_returns_what_set_wrote() {
        let (service, _) = service();

        service.set("/app/url", "https://example.test", false).await.unwrap();
        let parameter = service.get("/app/url", false).await.unwrap();

        assert_eq!(parameter.name, "/caravel/app/url");
        assert_eq!(parameter.value, "https://example.test");
    }

    #[tokio::test]
    async fn test_secret_flag_selects_encrypted_storage() {
        let (service, store) = service();

        service.set("/db/password", "hunter2", true).await.unwrap();

        assert_eq!(
            store.kind_of("/caravel/db/password").await,
            Some(ParameterKind::Secret)
        );
    }

    #[tokio::test]
    async fn test_invalid_names_never_reach_the_store() {
        let (service, store) = service();

        let err = service.set("bad name", "value", false).await.unwrap_err();

        assert!(matches!(err, OpsError::InvalidParameterName(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_depth_limit_applies_before_the_store() {
        let (service, store) = service();
        let deep = "/a".repeat(15);

        let err = service.get(&deep, false).await.unwrap_err();

        assert!(matches!(err, OpsError::TooManyLevels(15)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_parameter_reports_qualified_name() {
        let (service, _) = service();

        let err = service.get("/app/url", false).await.unwrap_err();

        assert!(matches!(err, OpsError::ParameterNotFound(name) if name == "/caravel/app/url"));
    }

    #[tokio::test]
    async fn test_bare_names_cannot_contain_separators() {
        let (service, store) = service();

        let err = service.get("app/url", false).await.unwrap_err();

        assert!(matches!(err, OpsError::InvalidParameterName(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_overwrite_acknowledges_new_version() {
        let (service, _) = service();

        service.set("/app/url", "one", false).await.unwrap();
        let ack = service.set("/app/url", "two", false).await.unwrap();

        assert_eq!(ack, WriteAck { version: 2 });
    }
}
