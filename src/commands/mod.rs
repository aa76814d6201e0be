//! Command implementations.

pub mod deploy;
pub mod param;
pub mod setup;
pub mod status;

/// Registers all commands with the registry.
///
/// This should be called automatically when the library is used,
/// but can also be called explicitly if needed.
pub fn register_all() {
    deploy::register();
    param::register();
    setup::register();
    status::register();
}
