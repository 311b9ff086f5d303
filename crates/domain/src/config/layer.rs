use std::fmt;

/// A sparse set of raw configuration values from one source.
///
/// `None` means "not set by this source" and defers to the next lower
/// source during resolution. Values are kept as the raw text the source
/// supplied; typing and validation happen in the resolver.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub db_host: Option<String>,
    pub db_port: Option<String>,
    pub db_schema: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub config_dir: Option<String>,
    pub bind_dir: Option<String>,
    pub log_dir: Option<String>,
    pub simulate: Option<String>,
    pub timeout: Option<String>,
}

impl ConfigLayer {
    /// Field names understood by [`ConfigLayer::set`], in declaration order.
    pub const FIELDS: [&'static str; 10] = [
        "db_host",
        "db_port",
        "db_schema",
        "db_user",
        "db_password",
        "config_dir",
        "bind_dir",
        "log_dir",
        "simulate",
        "timeout",
    ];

    /// Sets a field by name. Returns `false` if the name is unknown.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "db_host" => &mut self.db_host,
            "db_port" => &mut self.db_port,
            "db_schema" => &mut self.db_schema,
            "db_user" => &mut self.db_user,
            "db_password" => &mut self.db_password,
            "config_dir" => &mut self.config_dir,
            "bind_dir" => &mut self.bind_dir,
            "log_dir" => &mut self.log_dir,
            "simulate" => &mut self.simulate,
            "timeout" => &mut self.timeout,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Debug for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLayer")
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
