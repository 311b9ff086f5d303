use dns_admin_domain::{DomainError, NameServer, NameServerFields};
use tracing::{debug, instrument};

use crate::ports::{Capability, DbHandle, DbRow};
use crate::services::fetch_all_rows;

pub const NAME_SERVER_TABLE: &str = "nameservers";

const SELECT_COLUMNS: &str = "id::text AS id, name, fqdn, admin_user, \
     host(mgmt_address) AS mgmt_address, config_dir, bind_dir, \
     enabled::text AS enabled, description";

/// The name server table, bound to a borrowed database handle.
///
/// The table never connects on construction and never caches rows; every
/// read goes through the handle's cursor.
pub struct NameServerTable<'h, H: DbHandle + ?Sized> {
    handler: &'h mut H,
}

impl<'h, H: DbHandle + ?Sized> NameServerTable<'h, H> {
    /// Binds the table to `handler`.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidHandler` - If the handler lacks any of the
    ///   capabilities in [`Capability::REQUIRED`]
    pub fn new(handler: &'h mut H) -> Result<Self, DomainError> {
        let supported = handler.capabilities();
        let missing: Vec<&'static str> = Capability::REQUIRED
            .iter()
            .filter(|cap| !supported.contains(*cap))
            .map(Capability::name)
            .collect();

        if !missing.is_empty() {
            return Err(DomainError::InvalidHandler { missing });
        }

        Ok(Self { handler })
    }

    pub fn table_name(&self) -> &'static str {
        NAME_SERVER_TABLE
    }

    pub fn handler(&self) -> &H {
        &*self.handler
    }

    /// All name servers, ordered by name.
    ///
    /// A row that fails validation aborts the whole read.
    #[instrument(skip(self))]
    pub async fn fetch_all(&mut self) -> Result<Vec<NameServer>, DomainError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM {NAME_SERVER_TABLE} ORDER BY name"
        );
        let rows = fetch_all_rows(&mut *self.handler, &query).await?;
        debug!(rows = rows.len(), "Fetched name servers");

        rows.iter().map(|row| NameServer::build(&fields_from_row(row))).collect()
    }

    #[instrument(skip(self))]
    pub async fn fetch_by_name(&mut self, name: &str) -> Result<Option<NameServer>, DomainError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM {NAME_SERVER_TABLE} WHERE name = {}",
            quote_literal(name)
        );
        let rows = fetch_all_rows(&mut *self.handler, &query).await?;

        rows.first()
            .map(|row| NameServer::build(&fields_from_row(row)))
            .transpose()
    }
}

pub(crate) fn fields_from_row(row: &DbRow) -> NameServerFields {
    let column = |name: &str| row.get(name).map(str::to_string);

    NameServerFields {
        id: column("id"),
        name: column("name"),
        fqdn: column("fqdn"),
        admin_user: column("admin_user"),
        mgmt_address: column("mgmt_address"),
        config_dir: column("config_dir"),
        bind_dir: column("bind_dir"),
        enabled: column("enabled"),
        description: column("description"),
    }
}

/// Renders `value` as a SQL string literal.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
