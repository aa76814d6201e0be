//! Command abstraction and the composed command tree.

use std::sync::Arc;

use async_trait::async_trait;
use clap::{ArgMatches, Command};

use crate::aws::ClientFactory;
use crate::error::{OpsError, Result};
use crate::input::Prompt;
use crate::store::{ConfigStore, SecretStore};

/// Long-lived collaborators handed to command factories.
///
/// Commands receive these at construction time and keep whichever handles
/// they need; nothing here is created per invocation.
pub struct HostServices {
    pub config: Arc<dyn ConfigStore>,
    pub secrets: Arc<dyn SecretStore>,
    pub input: Arc<dyn Prompt>,
    pub clients: Arc<ClientFactory>,
}

impl HostServices {
    /// Bundles the given collaborators.
    pub fn new(
        config: Arc<dyn ConfigStore>,
        secrets: Arc<dyn SecretStore>,
        input: Arc<dyn Prompt>,
        clients: Arc<ClientFactory>,
    ) -> Self {
        Self {
            config,
            secrets,
            input,
            clients,
        }
    }
}

/// A mountable operations command.
///
/// Implementations declare their command-line surface with [`definition`]
/// and execute against already-parsed arguments in [`run`]; parsing itself
/// happens once at the root.
///
/// [`definition`]: OpsCommand::definition
/// [`run`]: OpsCommand::run
#[async_trait]
pub trait OpsCommand: Send + Sync {
    /// Name the command is mounted under.
    fn name(&self) -> &'static str;

    /// Declares arguments, options, and help text.
    fn definition(&self) -> Command;

    /// Executes the command.
    async fn run(&self, matches: &ArgMatches) -> Result<()>;
}

/// The composed `ops` command tree.
pub struct OpsRoot {
    commands: Vec<Box<dyn OpsCommand>>,
}

impl OpsRoot {
    /// Composes a tree from already-constructed commands.
    pub fn new(commands: Vec<Box<dyn OpsCommand>>) -> Self {
        Self { commands }
    }

    /// Composes a tree from every registered command factory.
    ///
    /// [`init`](crate::init) must have run first so the registry is
    /// populated.
    pub fn from_registry(services: &HostServices) -> Result<Self> {
        Ok(Self::new(crate::registry::all_commands(services)?))
    }

    /// Builds the root command with every subcommand mounted.
    pub fn definition(&self) -> Command {
        let mut root = Command::new("ops")
            .about("Control a Caravel deployment.")
            .subcommand_required(true)
            .arg_required_else_help(true);
        for command in &self.commands {
            root = root.subcommand(command.definition());
        }
        root
    }

    /// Routes parsed arguments to the matching subcommand.
    pub async fn dispatch(&self, matches: &ArgMatches) -> Result<()> {
        let (name, sub) = matches
            .subcommand()
            .ok_or_else(|| OpsError::Other(anyhow::anyhow!("no command given")))?;
        let command = self
            .commands
            .iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| OpsError::Other(anyhow::anyhow!("unrecognized command: {name}")))?;
        command.run(sub).await
    }
}
