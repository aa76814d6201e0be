//! Connection settings resolved from stored configuration and the process
//! environment.

use crate::store::{ConfigStore, KEY_PROFILE, KEY_REGION_CODE, OPS_SECTION};

const DEFAULT_REGION_ENV: &str = "AWS_DEFAULT_REGION";
const REGION_ENV: &str = "AWS_REGION";

/// Named profile and region to use when talking to AWS.
///
/// Either field may be absent, in which case client construction leaves the
/// corresponding decision to the SDK's own default chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConnection {
    /// Shared-credentials profile name, if one is configured.
    pub profile: Option<String>,
    /// Region code, if one is configured or present in the environment.
    pub region: Option<String>,
}

impl ResolvedConnection {
    /// Resolves connection settings from `config` and the environment.
    ///
    /// The region is taken from stored configuration first, then from
    /// `AWS_DEFAULT_REGION`, then from `AWS_REGION`. Empty values are
    /// treated as unset at every step.
    pub async fn resolve(config: &dyn ConfigStore) -> Self {
        Self::resolve_with_env(config, |name| std::env::var(name).ok()).await
    }

    async fn resolve_with_env<F>(config: &dyn ConfigStore, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = config
            .get(OPS_SECTION, KEY_PROFILE)
            .await
            .filter(|value| !value.is_empty());

        let region = config
            .get(OPS_SECTION, KEY_REGION_CODE)
            .await
            .filter(|value| !value.is_empty())
            .or_else(|| env(DEFAULT_REGION_ENV).filter(|value| !value.is_empty()))
            .or_else(|| env(REGION_ENV).filter(|value| !value.is_empty()));

        Self { profile, region }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryConfigStore;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[tokio::test]
    async fn test_resolve_prefers_configured_region() {
        let config = MemoryConfigStore::new();
        config.seed(OPS_SECTION, KEY_REGION_CODE, "eu-west-1").await;

        let resolved = ResolvedConnection::resolve_with_env(&config, |name| match name {
            DEFAULT_REGION_ENV => Some("us-east-2".to_string()),
            REGION_ENV => Some("us-west-2".to_string()),
            _ => None,
        })
        .await;

        assert_eq!(resolved.region.as_deref(), Some("eu-west-1"));
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_default_region_env() {
        let config = MemoryConfigStore::new();

        let resolved = ResolvedConnection::resolve_with_env(&config, |name| match name {
            DEFAULT_REGION_ENV => Some("us-east-2".to_string()),
            REGION_ENV => Some("us-west-2".to_string()),
            _ => None,
        })
        .await;

        assert_eq!(resolved.region.as_deref(), Some("us-east-2"));
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_region_env() {
        let config = MemoryConfigStore::new();

        let resolved = ResolvedConnection::resolve_with_env(&config, |name| match name {
            REGION_ENV => Some("us-west-2".to_string()),
            _ => None,
        })
        .await;

        assert_eq!(resolved.region.as_deref(), Some("us-west-2"));
    }

    #[tokio::test]
    async fn test_resolve_treats_empty_values_as_unset() {
        let config = MemoryConfigStore::new();
        config.seed(OPS_SECTION, KEY_REGION_CODE, "").await;
        config.seed(OPS_SECTION, KEY_PROFILE, "").await;

        let resolved = ResolvedConnection::resolve_with_env(&config, |name| match name {
            DEFAULT_REGION_ENV => Some(String::new()),
            REGION_ENV => Some("ap-southeast-2".to_string()),
            _ => None,
        })
        .await;

        assert_eq!(resolved.profile, None);
        assert_eq!(resolved.region.as_deref(), Some("ap-southeast-2"));
    }

    #[tokio::test]
    async fn test_resolve_without_any_source_leaves_both_unset() {
        let config = MemoryConfigStore::new();

        let resolved = ResolvedConnection::resolve_with_env(&config, no_env).await;

        assert_eq!(resolved, ResolvedConnection::default());
    }

    #[tokio::test]
    async fn test_resolve_picks_up_profile() {
        let config = MemoryConfigStore::new();
        config.seed(OPS_SECTION, KEY_PROFILE, "staging").await;

        let resolved = ResolvedConnection::resolve_with_env(&config, no_env).await;

        assert_eq!(resolved.profile.as_deref(), Some("staging"));
    }
}
