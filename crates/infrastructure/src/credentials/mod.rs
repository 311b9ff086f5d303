//! Database password lookup for configurations that carry no password.
mod pgpass;

pub use pgpass::{default_pgpass_path, PgPassEntry, PgPassFile};

use dns_admin_domain::{DomainError, EffectiveConfig};
use sqlx::postgres::PgConnectOptions;
use tracing::debug;

use crate::database::connect_options;

/// Fills in the password from the `.pgpass` file when the configuration
/// does not already carry one.
///
/// The lookup uses the same host, port, user and database the connection
/// will use.
pub fn resolve_password(config: &EffectiveConfig) -> Result<EffectiveConfig, DomainError> {
    if config.has_password() {
        return Ok(config.clone());
    }

    let Some((path, explicit)) = default_pgpass_path() else {
        debug!("No home directory and no PGPASSFILE, skipping password lookup");
        return Ok(config.clone());
    };

    let Some(file) = PgPassFile::load(&path, explicit)? else {
        return Ok(config.clone());
    };

    let password = lookup_password(&file, &connect_options(config));
    if password.is_some() {
        debug!(path = %path.display(), "Password found in password file");
    }

    Ok(config.with_password(password.map(str::to_string)))
}

/// Password for the connection described by `options`. Without an explicit
/// database (`PGDATABASE`), the database name is the user name.
fn lookup_password<'a>(file: &'a PgPassFile, options: &PgConnectOptions) -> Option<&'a str> {
    let user = options.get_username();
    let database = options.get_database().unwrap_or(user);

    file.lookup(options.get_host(), options.get_port(), database, user)
}
