//! DNS administration infrastructure: PostgreSQL access, configuration
//! file reading and credential lookup.
pub mod config_file;
pub mod credentials;
pub mod database;

pub use config_file::{load_config_layer, DEFAULT_CONFIG_FILE};
pub use database::PgDbHandle;
