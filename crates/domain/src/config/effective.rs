use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Fully resolved configuration for one run of the tool.
///
/// Built once at startup by [`EffectiveConfig::resolve`] and only ever read
/// afterwards. The password is never serialized and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_schema: String,
    pub db_user: String,
    #[serde(skip)]
    pub db_password: Option<String>,
    pub config_dir: PathBuf,
    pub bind_dir: PathBuf,
    pub log_dir: PathBuf,
    pub simulate: bool,
    pub timeout: u64,
}

impl EffectiveConfig {
    pub fn has_password(&self) -> bool {
        self.db_password.is_some()
    }

    /// Returns a copy carrying `password`, used when the password is looked
    /// up from a credential store after resolution.
    pub fn with_password(&self, password: Option<String>) -> Self {
        Self {
            db_password: password,
            ..self.clone()
        }
    }
}

impl fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveConfig")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_schema", &self.db_schema)
            .field("db_user", &self.db_user)
            .field("db_password", &self.db_password.as_ref().map(|_| "********"))
            .field("config_dir", &self.config_dir)
            .field("bind_dir", &self.bind_dir)
            .field("log_dir", &self.log_dir)
            .field("simulate", &self.simulate)
            .field("timeout", &self.timeout)
            .finish()
    }
}
