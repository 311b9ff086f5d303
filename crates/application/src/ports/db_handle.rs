use async_trait::async_trait;
use dns_admin_domain::DomainError;

/// An operation a database handle may advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Connect,
    OpenCursor,
    Execute,
    FetchOne,
}

impl Capability {
    /// Everything a handle must support to back a table.
    pub const REQUIRED: [Capability; 4] = [
        Capability::Connect,
        Capability::OpenCursor,
        Capability::Execute,
        Capability::FetchOne,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Capability::Connect => "connect",
            Capability::OpenCursor => "open_cursor",
            Capability::Execute => "execute",
            Capability::FetchOne => "fetch_one",
        }
    }
}

/// One result row, as column name / text value pairs in select order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbRow {
    columns: Vec<(String, Option<String>)>,
}

impl DbRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: Option<&str>) -> Self {
        self.push(column, value.map(str::to_string));
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        self.columns.push((column.into(), value));
    }

    /// Value of the named column; `None` for SQL NULL or a missing column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn first(&self) -> Option<&str> {
        self.columns.first().and_then(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Access to one database session.
///
/// A handle owns at most one connection and at most one query cursor. The
/// cursor buffers the result of the last [`execute`](DbHandle::execute) and
/// hands it out row by row through [`fetch_one`](DbHandle::fetch_one).
#[async_trait]
pub trait DbHandle: Send {
    /// Operations this handle actually supports.
    fn capabilities(&self) -> &[Capability];

    fn is_connected(&self) -> bool;

    /// Opens the connection. A no-op when already connected.
    async fn connect(&mut self) -> Result<(), DomainError>;

    fn is_cursor_open(&self) -> bool;

    /// Opens a query cursor on the current connection.
    ///
    /// # Errors
    ///
    /// * `DomainError::Database` - If no connection is open
    async fn open_cursor(&mut self) -> Result<(), DomainError>;

    /// Runs `query` and replaces the cursor's pending rows with its result.
    async fn execute(&mut self, query: &str) -> Result<(), DomainError>;

    /// Next pending row, or `None` when the result is exhausted.
    async fn fetch_one(&mut self) -> Result<Option<DbRow>, DomainError>;

    /// Discards pending rows and closes the cursor.
    async fn close_cursor(&mut self) -> Result<(), DomainError>;

    /// Closes the cursor, if open, and the connection.
    async fn disconnect(&mut self) -> Result<(), DomainError>;
}
