use dns_admin_domain::DomainError;
use tracing::{debug, instrument};

use crate::ports::DbHandle;
use crate::services::CursorScope;

/// Resolved through the schema search path set on the connection.
pub const SCHEMA_VERSION_QUERY: &str = "SELECT get_schema_version()::text";

/// Reads the version of the deployed database schema.
pub struct SchemaVersionQuery;

impl SchemaVersionQuery {
    /// Returns the first column of the first row of [`SCHEMA_VERSION_QUERY`].
    ///
    /// Connects and opens a cursor when needed; a cursor opened here is
    /// closed again before returning, whether the query succeeded or not.
    /// A cursor that was already open is left with no pending rows.
    ///
    /// # Errors
    ///
    /// * `DomainError::SchemaVersion` - The query returned no row or NULL
    /// * `DomainError::Database` - Connecting or querying failed
    #[instrument(skip(handle))]
    pub async fn get<H: DbHandle + ?Sized>(handle: &mut H) -> Result<String, DomainError> {
        let scope = CursorScope::acquire(handle).await?;
        let result = Self::read_version(handle).await;
        scope.release(handle).await;

        let version = result?;
        debug!(version = %version, "Schema version read");
        Ok(version)
    }

    async fn read_version<H: DbHandle + ?Sized>(handle: &mut H) -> Result<String, DomainError> {
        handle.execute(SCHEMA_VERSION_QUERY).await?;

        let row = handle.fetch_one().await?.ok_or_else(|| {
            DomainError::SchemaVersion(
                "the version query returned no rows; the schema does not match this tool"
                    .to_string(),
            )
        })?;

        let mut skipped = 0usize;
        while handle.fetch_one().await?.is_some() {
            skipped += 1;
        }
        if skipped > 0 {
            debug!(skipped, "Discarded extra rows of the version query");
        }

        row.first().map(str::to_string).ok_or_else(|| {
            DomainError::SchemaVersion("the version query returned NULL".to_string())
        })
    }
}
