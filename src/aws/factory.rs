//! Lazily memoized AWS client construction.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_sdk_ssm::Client;
use tokio::sync::OnceCell;
use tracing::debug;

use super::ResolvedConnection;

/// Builds AWS service clients on first use and hands out the same instance
/// afterwards.
///
/// Construction itself is infallible; misconfiguration surfaces as request
/// errors from the returned client, not from the factory.
pub struct ClientFactory {
    connection: ResolvedConnection,
    credentials: OnceCell<Option<SharedCredentialsProvider>>,
    client: OnceCell<Client>,
}

impl ClientFactory {
    /// Creates a factory for the given connection settings.
    pub fn new(connection: ResolvedConnection) -> Self {
        Self {
            connection,
            credentials: OnceCell::new(),
            client: OnceCell::new(),
        }
    }

    /// The connection settings this factory was created with.
    pub fn connection(&self) -> &ResolvedConnection {
        &self.connection
    }

    /// Profile-backed credentials provider, if a profile is configured.
    ///
    /// Built at most once; concurrent callers share the same instance.
    pub async fn credentials(&self) -> Option<&SharedCredentialsProvider> {
        self.credentials
            .get_or_init(|| async {
                self.connection.profile.as_deref().map(|profile| {
                    debug!(profile, "using shared credentials profile");
                    SharedCredentialsProvider::new(
                        aws_config::profile::ProfileFileCredentialsProvider::builder()
                            .profile_name(profile)
                            .build(),
                    )
                })
            })
            .await
            .as_ref()
    }

    /// SSM client for the resolved connection.
    ///
    /// Built at most once; concurrent callers share the same instance. The
    /// region and credentials provider are attached only when the
    /// corresponding setting is present, leaving everything else to the
    /// SDK's defaults.
    pub async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                let mut loader = aws_config::defaults(BehaviorVersion::latest());
                if let Some(region) = self.connection.region.clone() {
                    loader = loader.region(Region::new(region));
                }
                if let Some(credentials) = self.credentials().await {
                    loader = loader.credentials_provider(credentials.clone());
                }
                let config = loader.load().await;
                debug!(region = ?config.region(), "constructed ssm client");
                Client::new(&config)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory_with(profile: Option<&str>, region: Option<&str>) -> ClientFactory {
        ClientFactory::new(ResolvedConnection {
            profile: profile.map(String::from),
            region: region.map(String::from),
        })
    }

    #[tokio::test]
    async fn test_credentials_absent_without_profile() {
        let factory = factory_with(None, Some("us-east-1"));

        assert!(factory.credentials().await.is_none());
        assert!(factory.credentials().await.is_none());
    }

    #[tokio::test]
    async fn test_credentials_memoized_per_factory() {
        let factory = factory_with(Some("staging"), Some("us-east-1"));

        let first = factory.credentials().await.unwrap() as *const _;
        let second = factory.credentials().await.unwrap() as *const _;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_client_memoized_per_factory() {
        let factory = factory_with(None, Some("us-east-1"));

        let first = factory.client().await as *const _;
        let second = factory.client().await as *const _;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_client() {
        let factory = factory_with(None, Some("us-east-1"));

        let (first, second) = tokio::join!(factory.client(), factory.client());
        assert_eq!(first as *const _, second as *const _);
    }

    #[tokio::test]
    async fn test_client_carries_configured_region() {
        let factory = factory_with(None, Some("eu-central-1"));

        let client = factory.client().await;
        assert_eq!(
            client.config().region().map(|r| r.as_ref()),
            Some("eu-central-1")
        );
    }
}
