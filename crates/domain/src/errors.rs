use thiserror::Error;

/// Discriminant of a [`DomainError`], used by callers that dispatch on the
/// failure category rather than on the concrete variant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ConfigValidation,
    NullEntityValue,
    TypeCoercion,
    AddressFormat,
    InvalidHandler,
    SchemaVersion,
    Database,
    CredentialStore,
    ConfigFile,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid configuration value for '{field}' ({value:?}): {reason}")]
    ConfigValidation {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{entity}: required field '{field}' is missing")]
    NullEntityValue {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Cannot convert '{field}' value {value:?} to {expected}")]
    TypeCoercion {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid IP address for '{field}': {value:?}")]
    AddressFormat { field: &'static str, value: String },

    #[error("Database handle does not support: {}", .missing.join(", "))]
    InvalidHandler { missing: Vec<&'static str> },

    #[error("Could not determine schema version: {0}")]
    SchemaVersion(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Credential store error: {0}")]
    CredentialStore(String),

    #[error("Configuration file error: {0}")]
    ConfigFile(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigValidation { .. } => ErrorKind::ConfigValidation,
            Self::NullEntityValue { .. } => ErrorKind::NullEntityValue,
            Self::TypeCoercion { .. } => ErrorKind::TypeCoercion,
            Self::AddressFormat { .. } => ErrorKind::AddressFormat,
            Self::InvalidHandler { .. } => ErrorKind::InvalidHandler,
            Self::SchemaVersion(_) => ErrorKind::SchemaVersion,
            Self::Database(_) => ErrorKind::Database,
            Self::CredentialStore(_) => ErrorKind::CredentialStore,
            Self::ConfigFile(_) => ErrorKind::ConfigFile,
        }
    }

    pub(crate) fn config(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
