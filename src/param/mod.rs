//! Deployment parameters: the store abstraction, its backends, and the
//! validating service layer commands talk to.

mod memory;
mod service;
mod ssm;
mod store;

pub use memory::MemoryStore;
pub use service::ParamService;
pub use ssm::SsmStore;
pub use store::{Parameter, ParameterKind, ParameterStore, WriteAck};
