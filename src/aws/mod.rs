//! AWS connection settings and lazily constructed service clients.

mod factory;
mod resolve;

pub use factory::ClientFactory;
pub use resolve::ResolvedConnection;
