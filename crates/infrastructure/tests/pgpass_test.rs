use dns_admin_domain::ErrorKind;
use dns_admin_infrastructure::credentials::PgPassFile;
use std::io::Write;
use tempfile::NamedTempFile;

fn pgpass_file(content: &str, mode: u32) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(mode)).unwrap();
    }
    #[cfg(not(unix))]
    let _ = mode;

    file
}

#[test]
fn test_load_and_lookup() {
    let file = pgpass_file(
        "localhost:5432:dnsadmin:dnsadmin:s3cret\n*:*:*:*:catchall\n",
        0o600,
    );

    let pgpass = PgPassFile::load(file.path(), true).unwrap().unwrap();

    assert_eq!(
        pgpass.lookup("localhost", 5432, "dnsadmin", "dnsadmin"),
        Some("s3cret")
    );
    assert_eq!(pgpass.lookup("db.example.com", 5433, "x", "y"), Some("catchall"));
}

#[test]
fn test_missing_optional_file_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join(".pgpass");

    assert_eq!(PgPassFile::load(&missing, false).unwrap(), None);
}

#[test]
fn test_missing_required_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("custom-pgpass");

    let err = PgPassFile::load(&missing, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialStore);
}

#[cfg(unix)]
#[test]
fn test_world_readable_file_is_ignored() {
    let file = pgpass_file("*:*:*:*:leaked\n", 0o644);

    assert_eq!(PgPassFile::load(file.path(), true).unwrap(), None);
}
