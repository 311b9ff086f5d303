//! DNS administration domain layer
pub mod config;
pub mod errors;
pub mod name_server;
pub mod validators;

pub use config::{ConfigDefaults, ConfigLayer, EffectiveConfig};
pub use errors::{DomainError, ErrorKind};
pub use name_server::{NameServer, NameServerFields};
