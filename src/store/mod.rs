//! Configuration and secret persistence.
//!
//! Core components never touch files directly; they depend on the
//! [`ConfigStore`] and [`SecretStore`] contracts. The file-backed
//! implementations live in [`file`], the in-memory test doubles in
//! [`memory`].

pub mod file;
pub mod memory;

pub use file::{FileConfigStore, FileSecretStore};
pub use memory::{MemoryConfigStore, MemorySecretStore};

use crate::Result;
use async_trait::async_trait;

/// Configuration section holding the deployment's AWS identity settings.
pub const OPS_SECTION: &str = "ops";

/// Config key for the AWS account ID.
pub const KEY_ACCOUNT_ID: &str = "aws.account-id";
/// Config key for the AWS region code.
pub const KEY_REGION_CODE: &str = "aws.region-code";
/// Config key for the named AWS profile.
pub const KEY_PROFILE: &str = "aws.profile";
/// Secret key for the IAM access key ID.
pub const KEY_ACCESS_KEY_ID: &str = "aws.access-key-id";
/// Secret key for the IAM secret access key.
pub const KEY_SECRET_ACCESS_KEY: &str = "aws.secret-access-key";

/// Non-sensitive key/value configuration, grouped by section.
///
/// Mutations are buffered in memory; callers must invoke [`save`] to flush.
/// The setup pipeline relies on that split so a failed sequence leaves the
/// persisted configuration untouched.
///
/// [`save`]: ConfigStore::save
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Returns the value under `section`/`key`, if any.
    async fn get(&self, section: &str, key: &str) -> Option<String>;

    /// Sets the value under `section`/`key`, replacing any previous value.
    async fn set(&self, section: &str, key: &str, value: &str);

    /// Flushes buffered values to the backing storage.
    async fn save(&self) -> Result<()>;
}

/// Sensitive key/value storage, grouped by section.
///
/// Unlike [`ConfigStore`], writes persist immediately; there is no separate
/// flush step and no read path in the contract.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Stores the value under `section`/`key`, replacing any previous value.
    async fn set(&self, section: &str, key: &str, value: &str) -> Result<()>;
}
