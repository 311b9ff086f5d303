use async_trait::async_trait;
use dns_admin_application::ports::{Capability, DbHandle, DbRow};
use dns_admin_domain::DomainError;
use std::collections::VecDeque;

// ============================================================================
// Mock DbHandle
// ============================================================================

/// In-memory handle: every query returns the configured rows.
pub struct MockDbHandle {
    capabilities: Vec<Capability>,
    rows: Vec<DbRow>,
    pending: VecDeque<DbRow>,
    connected: bool,
    cursor_open: bool,
    fail_execute: bool,
    pub executed: Vec<String>,
    pub connects: usize,
    pub cursor_opens: usize,
    pub cursor_closes: usize,
}

impl MockDbHandle {
    pub fn new() -> Self {
        Self {
            capabilities: Capability::REQUIRED.to_vec(),
            rows: Vec::new(),
            pending: VecDeque::new(),
            connected: false,
            cursor_open: false,
            fail_execute: false,
            executed: Vec::new(),
            connects: 0,
            cursor_opens: 0,
            cursor_closes: 0,
        }
    }

    pub fn with_rows(rows: Vec<DbRow>) -> Self {
        Self {
            rows,
            ..Self::new()
        }
    }

    pub fn without(mut self, capability: Capability) -> Self {
        self.capabilities.retain(|c| *c != capability);
        self
    }

    pub fn failing_execute(mut self) -> Self {
        self.fail_execute = true;
        self
    }

    pub fn connected(mut self) -> Self {
        self.connected = true;
        self
    }

    pub fn with_open_cursor(mut self) -> Self {
        self.connected = true;
        self.cursor_open = true;
        self
    }
}

impl Default for MockDbHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DbHandle for MockDbHandle {
    fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn connect(&mut self) -> Result<(), DomainError> {
        self.connects += 1;
        self.connected = true;
        Ok(())
    }

    fn is_cursor_open(&self) -> bool {
        self.cursor_open
    }

    async fn open_cursor(&mut self) -> Result<(), DomainError> {
        if !self.connected {
            return Err(DomainError::Database("not connected".to_string()));
        }
        self.cursor_opens += 1;
        self.cursor_open = true;
        Ok(())
    }

    async fn execute(&mut self, query: &str) -> Result<(), DomainError> {
        if !self.cursor_open {
            return Err(DomainError::Database("no open cursor".to_string()));
        }
        self.executed.push(query.to_string());
        if self.fail_execute {
            return Err(DomainError::Database("mock execute failure".to_string()));
        }
        self.pending = self.rows.iter().cloned().collect();
        Ok(())
    }

    async fn fetch_one(&mut self) -> Result<Option<DbRow>, DomainError> {
        if !self.cursor_open {
            return Err(DomainError::Database("no open cursor".to_string()));
        }
        Ok(self.pending.pop_front())
    }

    async fn close_cursor(&mut self) -> Result<(), DomainError> {
        self.cursor_closes += 1;
        self.cursor_open = false;
        self.pending.clear();
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), DomainError> {
        self.cursor_open = false;
        self.connected = false;
        Ok(())
    }
}

pub fn name_server_row(id: &str, name: &str, address: &str) -> DbRow {
    DbRow::new()
        .with("id", Some(id))
        .with("name", Some(name))
        .with("fqdn", Some(&format!("{name}.example.com")))
        .with("admin_user", Some("bind"))
        .with("mgmt_address", Some(address))
        .with("config_dir", Some("/etc/bind"))
        .with("bind_dir", Some("/var/bind"))
        .with("enabled", Some("true"))
        .with("description", None)
}
