mod pg_handle;

pub use pg_handle::PgDbHandle;

use dns_admin_domain::EffectiveConfig;
use sqlx::postgres::PgConnectOptions;

pub const APPLICATION_NAME: &str = "dns-admin";

/// Builds connection options from the effective configuration.
///
/// The configured schema becomes the session `search_path`, so unqualified
/// table and function names resolve inside it. `.pgpass` is not consulted
/// here; password lookup happens in [`crate::credentials`].
pub fn connect_options(config: &EffectiveConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new_without_pgpass()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .application_name(APPLICATION_NAME)
        .options([("search_path", config.db_schema.as_str())]);

    match &config.db_password {
        Some(password) => options.password(password),
        None => options,
    }
}
