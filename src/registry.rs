//! Command factory and registration system.

use crate::{HostServices, OpsCommand, OpsError, Result};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Factory function type for constructing commands.
pub type CommandFactory = fn(&HostServices) -> Result<Box<dyn OpsCommand>>;

static COMMAND_REGISTRY: OnceLock<RwLock<HashMap<String, CommandFactory>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, CommandFactory>> {
    COMMAND_REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Registers a command factory function.
///
/// This is typically called from command modules' `register()` functions
/// during library initialization.
///
/// # Example
///
/// ```no_run
/// use caravel_ops::registry::register_command;
/// use caravel_ops::{HostServices, OpsCommand, Result};
///
/// fn my_command_factory(services: &HostServices) -> Result<Box<dyn OpsCommand>> {
///     // Construct and return the command instance
///     # unimplemented!()
/// }
///
/// pub fn register() {
///     register_command("mycommand", my_command_factory);
/// }
/// ```
pub fn register_command(name: &str, factory: CommandFactory) {
    let mut reg = registry().write().unwrap();
    reg.insert(name.to_string(), factory);
}

/// Constructs the command registered under `name`.
///
/// # Errors
///
/// Returns an error if:
/// - No factory is registered under `name` (missing `register()` or
///   [`init`](crate::init) call)
/// - The factory itself fails to construct the command
pub fn new_command(name: &str, services: &HostServices) -> Result<Box<dyn OpsCommand>> {
    let reg = registry().read().unwrap();
    let factory = reg.get(name).ok_or_else(|| {
        OpsError::Other(anyhow::anyhow!(
            "unknown command: {} (was caravel_ops::init() called?)",
            name
        ))
    })?;

    factory(services)
}

/// Constructs every registered command, ordered by name.
pub fn all_commands(services: &HostServices) -> Result<Vec<Box<dyn OpsCommand>>> {
    let reg = registry().read().unwrap();
    let mut entries: Vec<(&String, &CommandFactory)> = reg.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(_, factory)| factory(services))
        .collect()
}
