use dns_admin_domain::DomainError;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One `hostname:port:database:username:password` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgPassEntry {
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl PgPassEntry {
    fn matches(&self, host: &str, port: u16, database: &str, username: &str) -> bool {
        let field = |pattern: &str, value: &str| pattern == "*" || pattern == value;

        field(&self.host, host)
            && field(&self.port, &port.to_string())
            && field(&self.database, database)
            && field(&self.username, username)
    }
}

/// A parsed PostgreSQL password file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PgPassFile {
    entries: Vec<PgPassEntry>,
}

impl PgPassFile {
    /// Reads and parses the password file at `path`.
    ///
    /// A missing file yields `Ok(None)` unless `required` is set. On Unix a
    /// file readable by group or others is ignored with a warning, like
    /// libpq does.
    ///
    /// # Errors
    ///
    /// * `DomainError::CredentialStore` - The file is required but missing,
    ///   or cannot be read
    pub fn load(path: &Path, required: bool) -> Result<Option<Self>, DomainError> {
        if !path.exists() {
            if required {
                return Err(DomainError::CredentialStore(format!(
                    "password file {} does not exist",
                    path.display()
                )));
            }
            return Ok(None);
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = std::fs::metadata(path)
                .map_err(|e| {
                    DomainError::CredentialStore(format!("{}: {}", path.display(), e))
                })?
                .permissions()
                .mode();
            if mode & 0o077 != 0 {
                warn!(
                    path = %path.display(),
                    "Password file has group or world access; ignoring it (permissions should be 0600)"
                );
                return Ok(None);
            }
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| DomainError::CredentialStore(format!("{}: {}", path.display(), e)))?;

        Ok(Some(Self::parse(&content)))
    }

    /// Parses password file content. Comments, blank lines and lines with
    /// fewer than five fields are skipped.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .filter_map(parse_line)
            .collect();

        Self { entries }
    }

    /// Password of the first entry matching the connection parameters.
    pub fn lookup(&self, host: &str, port: u16, database: &str, username: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(host, port, database, username))
            .map(|entry| entry.password.as_str())
    }

    pub fn entries(&self) -> &[PgPassEntry] {
        &self.entries
    }
}

/// Location of the password file and whether it was named explicitly
/// through `PGPASSFILE`.
pub fn default_pgpass_path() -> Option<(PathBuf, bool)> {
    if let Some(path) = std::env::var_os("PGPASSFILE").filter(|p| !p.is_empty()) {
        return Some((PathBuf::from(path), true));
    }

    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|home| (PathBuf::from(home).join(".pgpass"), false))
}

/// Splits on unescaped `:`; `\:` and `\\` stand for literal characters.
fn parse_line(line: &str) -> Option<PgPassEntry> {
    let mut fields = Vec::with_capacity(5);
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ':' if fields.len() < 4 => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    if fields.len() != 5 {
        return None;
    }

    let mut fields = fields.into_iter();
    Some(PgPassEntry {
        host: fields.next()?,
        port: fields.next()?,
        database: fields.next()?,
        username: fields.next()?,
        password: fields.next()?,
    })
}
