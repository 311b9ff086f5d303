use dns_admin_domain::{ConfigLayer, DomainError};
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::{debug, warn};

/// Read when no configuration file is named on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/dns-admin/dns-admin.toml";

/// Loads the file layer of the configuration.
///
/// An explicitly named file must exist. Without one, the default file is
/// used when present and an empty layer is returned otherwise. Returns the
/// path actually read, if any.
///
/// # Errors
///
/// * `DomainError::ConfigFile` - The file is missing (explicit path only),
///   unreadable, not valid TOML, or has a value of an unsupported type
pub fn load_config_layer(
    path: Option<&Path>,
) -> Result<(ConfigLayer, Option<PathBuf>), DomainError> {
    let config_path = match path {
        Some(p) if !p.exists() => {
            return Err(DomainError::ConfigFile(format!(
                "config file not found: {}",
                p.display()
            )));
        }
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                debug!(path = DEFAULT_CONFIG_FILE, "No configuration file, using defaults");
                return Ok((ConfigLayer::default(), None));
            }
            default
        }
    };

    let content = std::fs::read_to_string(&config_path)
        .map_err(|e| DomainError::ConfigFile(format!("{}: {}", config_path.display(), e)))?;
    let layer = parse_config_layer(&content)
        .map_err(|e| DomainError::ConfigFile(format!("{}: {}", config_path.display(), e)))?;

    Ok((layer, Some(config_path)))
}

/// Parses TOML content into a sparse layer.
///
/// Keys are the `EffectiveConfig` field names at the top level. Strings,
/// integers and booleans are kept as raw text for the resolver. Unknown keys
/// are ignored with a warning.
pub fn parse_config_layer(content: &str) -> Result<ConfigLayer, String> {
    let table: Table = content.parse().map_err(|e: toml::de::Error| e.message().to_string())?;
    let mut layer = ConfigLayer::default();

    for (key, value) in &table {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Boolean(b) => b.to_string(),
            other => {
                return Err(format!(
                    "'{}' has unsupported type {}",
                    key,
                    other.type_str()
                ))
            }
        };

        if !layer.set(key, raw) {
            warn!(key = %key, "Ignoring unknown configuration key");
        }
    }

    Ok(layer)
}
