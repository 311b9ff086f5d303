use async_trait::async_trait;
use dns_admin_application::ports::{Capability, DbHandle, DbRow};
use dns_admin_domain::{DomainError, EffectiveConfig};
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{Column, Connection, PgConnection, Row};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use super::connect_options;

/// [`DbHandle`] backed by a single PostgreSQL connection.
///
/// The cursor is a client-side buffer holding the rows of the last
/// executed statement.
pub struct PgDbHandle {
    options: PgConnectOptions,
    timeout: Duration,
    connection: Option<PgConnection>,
    cursor: Option<VecDeque<DbRow>>,
}

impl PgDbHandle {
    pub fn new(config: &EffectiveConfig) -> Self {
        Self {
            options: connect_options(config),
            timeout: Duration::from_secs(config.timeout),
            connection: None,
            cursor: None,
        }
    }

    fn target(&self) -> String {
        format!(
            "{}@{}:{}",
            self.options.get_username(),
            self.options.get_host(),
            self.options.get_port()
        )
    }
}

#[async_trait]
impl DbHandle for PgDbHandle {
    fn capabilities(&self) -> &[Capability] {
        &Capability::REQUIRED
    }

    fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    #[instrument(skip(self))]
    async fn connect(&mut self) -> Result<(), DomainError> {
        if self.connection.is_some() {
            return Ok(());
        }

        let target = self.target();
        let connection = tokio::time::timeout(self.timeout, PgConnection::connect_with(&self.options))
            .await
            .map_err(|_| {
                error!(server = %target, "Connection attempt timed out");
                DomainError::Database(format!(
                    "connecting to {} timed out after {}s",
                    target,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                error!(server = %target, error = %e, "Failed to connect");
                DomainError::Database(format!("connecting to {target}: {e}"))
            })?;

        info!(server = %target, "Connected to database");
        self.connection = Some(connection);
        Ok(())
    }

    fn is_cursor_open(&self) -> bool {
        self.cursor.is_some()
    }

    async fn open_cursor(&mut self) -> Result<(), DomainError> {
        if self.connection.is_none() {
            return Err(DomainError::Database(
                "cannot open a cursor without a connection".to_string(),
            ));
        }
        self.cursor = Some(VecDeque::new());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn execute(&mut self, query: &str) -> Result<(), DomainError> {
        let (Some(connection), Some(cursor)) = (self.connection.as_mut(), self.cursor.as_mut())
        else {
            return Err(DomainError::Database(
                "cannot execute a query without an open cursor".to_string(),
            ));
        };

        let rows = sqlx::query(query)
            .fetch_all(connection)
            .await
            .map_err(|e| {
                error!(error = %e, "Query failed");
                DomainError::Database(e.to_string())
            })?;

        cursor.clear();
        for row in &rows {
            cursor.push_back(to_db_row(row)?);
        }

        debug!(rows = cursor.len(), "Query executed");
        Ok(())
    }

    async fn fetch_one(&mut self) -> Result<Option<DbRow>, DomainError> {
        let cursor = self.cursor.as_mut().ok_or_else(|| {
            DomainError::Database("cannot fetch without an open cursor".to_string())
        })?;
        Ok(cursor.pop_front())
    }

    async fn close_cursor(&mut self) -> Result<(), DomainError> {
        self.cursor = None;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), DomainError> {
        self.cursor = None;

        if let Some(connection) = self.connection.take() {
            connection
                .close()
                .await
                .map_err(|e| DomainError::Database(format!("closing connection: {e}")))?;
            debug!("Disconnected from database");
        }
        Ok(())
    }
}

fn to_db_row(row: &PgRow) -> Result<DbRow, DomainError> {
    let mut out = DbRow::new();

    for column in row.columns() {
        let value: Option<String> = row.try_get(column.ordinal()).map_err(|e| {
            DomainError::Database(format!("column '{}' is not text: {e}", column.name()))
        })?;
        out.push(column.name(), value);
    }

    Ok(out)
}
