use serde::Serialize;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::errors::DomainError;
use crate::validators::{coerce_bool, non_blank, normalize_description};

const ENTITY: &str = "NameServer";

/// Raw, unvalidated name server data, as read from a table row or supplied
/// by the user. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameServerFields {
    pub id: Option<String>,
    pub name: Option<String>,
    pub fqdn: Option<String>,
    pub admin_user: Option<String>,
    pub mgmt_address: Option<String>,
    pub config_dir: Option<String>,
    pub bind_dir: Option<String>,
    pub enabled: Option<String>,
    pub description: Option<String>,
}

/// A managed BIND server.
///
/// Only constructed through [`NameServer::build`], so every instance has all
/// required fields and a parsed management address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameServer {
    pub id: i64,
    pub name: String,
    pub fqdn: String,
    pub admin_user: String,
    pub mgmt_address: IpAddr,
    pub config_dir: PathBuf,
    pub bind_dir: PathBuf,
    pub enabled: bool,
    pub description: Option<String>,
}

impl NameServer {
    /// Validates raw fields and builds a `NameServer`.
    ///
    /// Required fields are checked in this order, and the first missing one
    /// is reported: `id`, `name`, `fqdn`, `admin_user`, `mgmt_address`,
    /// `config_dir`, `bind_dir`. Blank strings count as missing.
    ///
    /// # Errors
    ///
    /// * `DomainError::NullEntityValue` - A required field is missing
    /// * `DomainError::TypeCoercion` - `id` is not a positive integer, or
    ///   `enabled` is not a boolean literal
    /// * `DomainError::AddressFormat` - `mgmt_address` is not an IP address
    pub fn build(fields: &NameServerFields) -> Result<Self, DomainError> {
        let id = required("id", &fields.id)?;
        let name = required("name", &fields.name)?;
        let fqdn = required("fqdn", &fields.fqdn)?;
        let admin_user = required("admin_user", &fields.admin_user)?;
        let mgmt_address = required("mgmt_address", &fields.mgmt_address)?;
        let config_dir = required("config_dir", &fields.config_dir)?;
        let bind_dir = required("bind_dir", &fields.bind_dir)?;

        let id = parse_id(id)?;

        let mgmt_address: IpAddr =
            mgmt_address
                .parse()
                .map_err(|_| DomainError::AddressFormat {
                    field: "mgmt_address",
                    value: mgmt_address.to_string(),
                })?;

        let enabled = match non_blank(fields.enabled.as_deref()) {
            None => true,
            Some(raw) => coerce_bool(raw).map_err(|_| DomainError::TypeCoercion {
                field: "enabled",
                value: raw.to_string(),
                expected: "boolean",
            })?,
        };

        Ok(Self {
            id,
            name: name.to_string(),
            fqdn: fqdn.to_string(),
            admin_user: admin_user.to_string(),
            mgmt_address,
            config_dir: PathBuf::from(config_dir),
            bind_dir: PathBuf::from(bind_dir),
            enabled,
            description: normalize_description(fields.description.as_deref()),
        })
    }
}

fn required<'a>(field: &'static str, raw: &'a Option<String>) -> Result<&'a str, DomainError> {
    non_blank(raw.as_deref()).ok_or(DomainError::NullEntityValue {
        entity: ENTITY,
        field,
    })
}

fn parse_id(raw: &str) -> Result<i64, DomainError> {
    let coercion_error = || DomainError::TypeCoercion {
        field: "id",
        value: raw.to_string(),
        expected: "positive integer",
    };

    let id: i64 = raw.parse().map_err(|_| coercion_error())?;
    if id <= 0 {
        return Err(coercion_error());
    }
    Ok(id)
}
