use std::path::PathBuf;

use super::{ConfigDefaults, ConfigLayer, EffectiveConfig};
use crate::errors::DomainError;
use crate::validators::{coerce_bool, validate_port, validate_timeout};

const MASKED_PASSWORD: &str = "********";

impl EffectiveConfig {
    /// Merges the three configuration sources into one `EffectiveConfig`.
    ///
    /// For every field the CLI value wins over the file value, which wins
    /// over the default. A source only takes part when it supplies a value.
    /// Every supplied value is validated, including values shadowed by a
    /// higher source, and the first invalid one aborts resolution.
    ///
    /// # Errors
    ///
    /// * `DomainError::ConfigValidation` - A value is empty, out of range,
    ///   not coercible to its type, or a password was found in the file layer
    pub fn resolve(
        defaults: &ConfigDefaults,
        file: &ConfigLayer,
        cli: &ConfigLayer,
    ) -> Result<Self, DomainError> {
        if file.db_password.is_some() {
            return Err(DomainError::config(
                "db_password",
                MASKED_PASSWORD,
                "the password must not be stored in the configuration file",
            ));
        }

        Ok(Self {
            db_host: layered("db_host", &file.db_host, &cli.db_host, &defaults.db_host, text)?,
            db_port: layered(
                "db_port",
                &file.db_port,
                &cli.db_port,
                &defaults.db_port,
                validate_port,
            )?,
            db_schema: layered(
                "db_schema",
                &file.db_schema,
                &cli.db_schema,
                &defaults.db_schema,
                text,
            )?,
            db_user: layered("db_user", &file.db_user, &cli.db_user, &defaults.db_user, text)?,
            db_password: cli.db_password.clone(),
            config_dir: layered(
                "config_dir",
                &file.config_dir,
                &cli.config_dir,
                &defaults.config_dir,
                path,
            )?,
            bind_dir: layered(
                "bind_dir",
                &file.bind_dir,
                &cli.bind_dir,
                &defaults.bind_dir,
                path,
            )?,
            log_dir: layered("log_dir", &file.log_dir, &cli.log_dir, &defaults.log_dir, path)?,
            simulate: layered(
                "simulate",
                &file.simulate,
                &cli.simulate,
                &defaults.simulate,
                coerce_bool,
            )?,
            timeout: layered(
                "timeout",
                &file.timeout,
                &cli.timeout,
                &defaults.timeout,
                validate_timeout,
            )?,
        })
    }
}

fn layered<T: Clone>(
    field: &'static str,
    file: &Option<String>,
    cli: &Option<String>,
    default: &T,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, DomainError> {
    let check = |raw: &String| {
        parse(raw.as_str()).map_err(|reason| DomainError::config(field, raw, reason))
    };

    let from_file = file.as_ref().map(&check).transpose()?;
    let from_cli = cli.as_ref().map(&check).transpose()?;

    Ok(from_cli.or(from_file).unwrap_or_else(|| default.clone()))
}

fn text(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("value must not be empty".to_string());
    }
    Ok(raw.to_string())
}

fn path(raw: &str) -> Result<PathBuf, String> {
    text(raw).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn layer(pairs: &[(&str, &str)]) -> ConfigLayer {
        let mut layer = ConfigLayer::default();
        for (field, value) in pairs {
            assert!(layer.set(field, *value));
        }
        layer
    }

    #[test]
    fn test_empty_layers_yield_defaults() {
        let defaults = ConfigDefaults::default();
        let config =
            EffectiveConfig::resolve(&defaults, &ConfigLayer::default(), &ConfigLayer::default())
                .unwrap();

        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_schema, "dns");
        assert_eq!(config.db_user, "dnsadmin");
        assert_eq!(config.db_password, None);
        assert_eq!(config.config_dir, PathBuf::from("/etc/bind"));
        assert_eq!(config.bind_dir, PathBuf::from("/var/bind"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/bind"));
        assert!(!config.simulate);
        assert_eq!(config.timeout, 10);
    }

    #[test]
    fn test_file_password_is_rejected() {
        let file = layer(&[("db_password", "hunter2")]);
        let err = EffectiveConfig::resolve(&ConfigDefaults::default(), &file, &ConfigLayer::default())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConfigValidation);
        assert!(!err.to_string().contains("hunter2"));
    }

    #[test]
    fn test_file_password_error_does_not_reveal_length() {
        let short = layer(&[("db_password", "ab")]);
        let long = layer(&[("db_password", "a-much-longer-password")]);

        let resolve_file = |file: &ConfigLayer| {
            EffectiveConfig::resolve(&ConfigDefaults::default(), file, &ConfigLayer::default())
                .unwrap_err()
        };

        let short_err = resolve_file(&short);
        assert_eq!(short_err, resolve_file(&long));
        match short_err {
            DomainError::ConfigValidation { value, .. } => assert_eq!(value, "********"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_shadowed_file_value_is_still_validated() {
        let file = layer(&[("db_port", "70000")]);
        let cli = layer(&[("db_port", "5433")]);

        let err = EffectiveConfig::resolve(&ConfigDefaults::default(), &file, &cli).unwrap_err();
        match err {
            DomainError::ConfigValidation { field, value, .. } => {
                assert_eq!(field, "db_port");
                assert_eq!(value, "70000");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_string_is_rejected() {
        let cli = layer(&[("db_host", "  ")]);
        let err = EffectiveConfig::resolve(&ConfigDefaults::default(), &ConfigLayer::default(), &cli)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigValidation);
    }

    #[test]
    fn test_host_accepted_verbatim() {
        let cli = layer(&[("db_host", "db-01.example.com:not-checked")]);
        let config =
            EffectiveConfig::resolve(&ConfigDefaults::default(), &ConfigLayer::default(), &cli)
                .unwrap();
        assert_eq!(config.db_host, "db-01.example.com:not-checked");
    }
}
