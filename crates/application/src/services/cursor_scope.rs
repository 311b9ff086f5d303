use dns_admin_domain::DomainError;
use tracing::{debug, warn};

use crate::ports::{DbHandle, DbRow};

/// Scoped access to a handle's query cursor.
///
/// [`acquire`](CursorScope::acquire) connects and opens a cursor when needed
/// and remembers whether it opened the cursor itself.
/// [`release`](CursorScope::release) closes a cursor opened this way and
/// must be called on every exit path of the operation.
#[must_use = "a CursorScope must be released"]
#[derive(Debug)]
pub struct CursorScope {
    opened_cursor: bool,
}

impl CursorScope {
    pub async fn acquire<H: DbHandle + ?Sized>(handle: &mut H) -> Result<Self, DomainError> {
        if !handle.is_connected() {
            debug!("No open connection, connecting");
            handle.connect().await?;
        }

        if handle.is_cursor_open() {
            return Ok(Self {
                opened_cursor: false,
            });
        }

        handle.open_cursor().await?;
        Ok(Self {
            opened_cursor: true,
        })
    }

    pub fn opened_cursor(&self) -> bool {
        self.opened_cursor
    }

    pub async fn release<H: DbHandle + ?Sized>(self, handle: &mut H) {
        if !self.opened_cursor {
            return;
        }
        if let Err(e) = handle.close_cursor().await {
            warn!(error = %e, "Failed to close query cursor");
        }
    }
}

/// Runs `query` inside a [`CursorScope`] and collects every result row.
pub async fn fetch_all_rows<H: DbHandle + ?Sized>(
    handle: &mut H,
    query: &str,
) -> Result<Vec<DbRow>, DomainError> {
    let scope = CursorScope::acquire(handle).await?;
    let result = drain(handle, query).await;
    scope.release(handle).await;
    result
}

async fn drain<H: DbHandle + ?Sized>(
    handle: &mut H,
    query: &str,
) -> Result<Vec<DbRow>, DomainError> {
    handle.execute(query).await?;

    let mut rows = Vec::new();
    while let Some(row) = handle.fetch_one().await? {
        rows.push(row);
    }
    Ok(rows)
}
