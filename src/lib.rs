//! Caravel Ops - operator tooling for Caravel deployments on AWS.
//!
//! Caravel Ops collects the day-to-day operations around a Caravel
//! deployment behind one command tree: storing AWS credentials, reading and
//! writing deployment parameters, and (eventually) driving the deployment
//! lifecycle itself.
//!
//! # Features
//!
//! - **One command tree**: Every operation mounts under `ops` and is
//!   resolved by name from a registry
//! - **Async/Await**: Built on tokio for non-blocking I/O
//! - **Lazy AWS clients**: Service clients and credentials are constructed
//!   on first use and shared for the life of the process
//! - **Namespaced parameters**: Every parameter name is validated and
//!   rewritten under the tool's namespace root before it reaches AWS
//! - **Split persistence**: Plain settings and secrets live in separate
//!   stores with separate flushing rules
//!
//! # Quick Start
//!
//! ```no_run
//! use caravel_ops::aws::{ClientFactory, ResolvedConnection};
//! use caravel_ops::input::TerminalPrompt;
//! use caravel_ops::store::{FileConfigStore, FileSecretStore};
//! use caravel_ops::{HostServices, OpsRoot};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> caravel_ops::Result<()> {
//!     caravel_ops::init();
//!
//!     let config = Arc::new(FileConfigStore::load("config.json").await?);
//!     let connection = ResolvedConnection::resolve(config.as_ref()).await;
//!     let services = HostServices::new(
//!         config,
//!         Arc::new(FileSecretStore::load("secrets.json").await?),
//!         Arc::new(TerminalPrompt::new()),
//!         Arc::new(ClientFactory::new(connection)),
//!     );
//!
//!     let root = OpsRoot::from_registry(&services)?;
//!     let matches = root.definition().get_matches();
//!     root.dispatch(&matches).await
//! }
//! ```

pub mod aws;
pub mod command;
pub mod commands;
pub mod error;
pub mod input;
pub mod param;
pub mod registry;
pub mod setup;
pub mod store;
pub mod validation;

pub use command::{HostServices, OpsCommand, OpsRoot};
pub use error::{OpsError, Result};
pub use param::{ParamService, Parameter, ParameterKind};
pub use setup::{SetupMode, SetupOptions, SetupPipeline};

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the library.
///
/// This registers all commands with the registry. It must run before
/// commands are resolved by name, and calling it again is a no-op.
pub fn init() {
    INIT.call_once(commands::register_all);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::{ClientFactory, ResolvedConnection};
    use crate::input::ScriptedPrompt;
    use crate::store::{MemoryConfigStore, MemorySecretStore};
    use std::sync::Arc;

    fn services() -> HostServices {
        HostServices::new(
            Arc::new(MemoryConfigStore::new()),
            Arc::new(MemorySecretStore::new()),
            Arc::new(ScriptedPrompt::new(Vec::<String>::new())),
            Arc::new(ClientFactory::new(ResolvedConnection::default())),
        )
    }

    #[test]
    fn test_library_initialization() {
        init();
        init();
    }

    #[test]
    fn test_every_builtin_command_resolves() {
        init();

        let services = services();
        for name in ["deploy", "param", "setup", "status"] {
            assert!(registry::new_command(name, &services).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_registry_backs_the_command_tree() {
        init();

        let root = OpsRoot::from_registry(&services()).unwrap();
        let definition = root.definition();

        for name in ["deploy", "param", "setup", "status"] {
            assert!(definition.find_subcommand(name).is_some(), "{name}");
        }
    }
}
