//! Deployment lifecycle command.
//!
//! The lifecycle actions are mounted and documented but not yet wired to an
//! installer; each one reports itself as unimplemented for now.

use async_trait::async_trait;
use clap::{ArgMatches, Command};

use crate::command::{HostServices, OpsCommand};
use crate::error::{OpsError, Result};

/// Installs, upgrades, and removes deployments.
pub struct DeployCommand;

/// Registers the deploy command with the registry.
pub fn register() {
    crate::registry::register_command("deploy", |_services: &HostServices| {
        Ok(Box::new(DeployCommand))
    });
}

#[async_trait]
impl OpsCommand for DeployCommand {
    fn name(&self) -> &'static str {
        "deploy"
    }

    fn definition(&self) -> Command {
        Command::new("deploy")
            .about("Install Caravel or upgrade a Caravel deployment.")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Command::new("install").about("Creates a new Caravel deployment."))
            .subcommand(Command::new("upgrade").about("Upgrades an existing Caravel deployment."))
            .subcommand(Command::new("remove").about("Completely removes a Caravel deployment."))
    }

    async fn run(&self, matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("install", _)) => Err(OpsError::NotImplemented("deploy install")),
            Some(("upgrade", _)) => Err(OpsError::NotImplemented("deploy upgrade")),
            Some(("remove", _)) => Err(OpsError::NotImplemented("deploy remove")),
            _ => Err(OpsError::Other(anyhow::anyhow!("no deploy action given"))),
        }
    }
}
