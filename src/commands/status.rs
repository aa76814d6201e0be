//! Deployment status command.

use async_trait::async_trait;
use clap::{ArgMatches, Command};

use crate::command::{HostServices, OpsCommand};
use crate::error::{OpsError, Result};

/// Reports the state of a deployment. Not yet wired to anything.
pub struct StatusCommand;

/// Registers the status command with the registry.
pub fn register() {
    crate::registry::register_command("status", |_services: &HostServices| {
        Ok(Box::new(StatusCommand))
    });
}

#[async_trait]
impl OpsCommand for StatusCommand {
    fn name(&self) -> &'static str {
        "status"
    }

    fn definition(&self) -> Command {
        Command::new("status").about("View the health of the Caravel deployment.")
    }

    async fn run(&self, _matches: &ArgMatches) -> Result<()> {
        Err(OpsError::NotImplemented("status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_reports_unimplemented() {
        let command = StatusCommand;
        let matches = command
            .definition()
            .try_get_matches_from(["status"])
            .unwrap();

        let err = command.run(&matches).await.unwrap_err();

        assert!(matches!(err, OpsError::NotImplemented("status")));
        assert_eq!(
            err.to_string(),
            "the status command has not been implemented yet"
        );
    }
}
