use std::path::PathBuf;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_SCHEMA: &str = "dns";
pub const DEFAULT_DB_USER: &str = "dnsadmin";
pub const DEFAULT_CONFIG_DIR: &str = "/etc/bind";
pub const DEFAULT_BIND_DIR: &str = "/var/bind";
pub const DEFAULT_LOG_DIR: &str = "/var/log/bind";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Built-in configuration values, always fully populated.
///
/// Passed explicitly into [`EffectiveConfig::resolve`](super::EffectiveConfig::resolve)
/// so tests and embedders can supply their own baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDefaults {
    pub db_host: String,
    pub db_port: u16,
    pub db_schema: String,
    pub db_user: String,
    pub config_dir: PathBuf,
    pub bind_dir: PathBuf,
    pub log_dir: PathBuf,
    pub simulate: bool,
    pub timeout: u64,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            db_host: DEFAULT_DB_HOST.to_string(),
            db_port: DEFAULT_DB_PORT,
            db_schema: DEFAULT_DB_SCHEMA.to_string(),
            db_user: DEFAULT_DB_USER.to_string(),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            bind_dir: PathBuf::from(DEFAULT_BIND_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            simulate: false,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}
