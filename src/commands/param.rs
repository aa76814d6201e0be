//! Deployment parameter command.

use std::sync::Arc;

use async_trait::async_trait;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::command::{HostServices, OpsCommand};
use crate::error::{OpsError, Result};
use crate::param::{ParamService, SsmStore};

/// Reads and writes deployment parameters.
pub struct ParamCommand {
    service: ParamService,
}

impl ParamCommand {
    /// Creates the command over the given service.
    pub fn new(service: ParamService) -> Self {
        Self { service }
    }
}

/// Registers the param command with the registry.
pub fn register() {
    crate::registry::register_command("param", |services: &HostServices| {
        let store = Arc::new(SsmStore::new(services.clients.clone()));
        Ok(Box::new(ParamCommand::new(ParamService::new(store))))
    });
}

#[async_trait]
impl OpsCommand for ParamCommand {
    fn name(&self) -> &'static str {
        "param"
    }

    fn definition(&self) -> Command {
        Command::new("param")
            .about("Inspect or adjust Caravel deployment parameters.")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(
                Command::new("get")
                    .about("Gets the current value of a Caravel deployment parameter.")
                    .arg(
                        Arg::new("name")
                            .required(true)
                            .value_name("NAME")
                            .help("Parameter name, with or without the namespace prefix."),
                    )
                    .arg(
                        Arg::new("all")
                            .long("all")
                            .action(ArgAction::SetTrue)
                            .help("Print the parameter and its metadata as JSON."),
                    )
                    .arg(
                        Arg::new("no-decrypt")
                            .long("no-decrypt")
                            .action(ArgAction::SetTrue)
                            .help("Leave an encrypted value as ciphertext."),
                    ),
            )
            .subcommand(
                Command::new("set")
                    .about("Sets the new value of a Caravel deployment parameter.")
                    .arg(
                        Arg::new("name")
                            .required(true)
                            .value_name("NAME")
                            .help("Parameter name, with or without the namespace prefix."),
                    )
                    .arg(
                        Arg::new("value")
                            .required(true)
                            .value_name("VALUE")
                            .help("Value to store."),
                    )
                    .arg(
                        Arg::new("secret")
                            .long("secret")
                            .action(ArgAction::SetTrue)
                            .help("Store the value encrypted."),
                    ),
            )
    }

    async fn run(&self, matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("get", sub)) => {
                let name = require(sub, "name")?;
                let decrypt = !sub.get_flag("no-decrypt");
                let parameter = self.service.get(name, decrypt).await?;
                if sub.get_flag("all") {
                    println!("{}", serde_json::to_string_pretty(&parameter)?);
                } else {
                    println!("{}", parameter.value);
                }
                Ok(())
            }
            Some(("set", sub)) => {
                let name = require(sub, "name")?;
                let value = require(sub, "value")?;
                let ack = self
                    .service
                    .set(name, value, sub.get_flag("secret"))
                    .await?;
                println!("Wrote version {}.", ack.version);
                Ok(())
            }
            _ => Err(OpsError::Other(anyhow::anyhow!("no param action given"))),
        }
    }
}

fn require<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| OpsError::Other(anyhow::anyhow!("missing required argument: {id}")))
}
