use anyhow::Context;
use dns_admin_domain::EffectiveConfig;
use dns_admin_infrastructure::credentials::resolve_password;
use dns_admin_infrastructure::PgDbHandle;
use tracing::debug;

/// Prepares the database handle. No connection is opened here; the first
/// operation that needs one connects.
pub fn init_database(config: &EffectiveConfig) -> anyhow::Result<PgDbHandle> {
    let config = resolve_password(config).context("Failed to look up the database password")?;

    if !config.has_password() {
        debug!("No password configured, relying on server-side authentication");
    }

    Ok(PgDbHandle::new(&config))
}
