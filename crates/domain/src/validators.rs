/// Lowest TCP port accepted for the PostgreSQL server.
pub const MIN_DB_PORT: u16 = 1;

/// Highest TCP port accepted for the PostgreSQL server.
pub const MAX_DB_PORT: u16 = 32767;

const TRUE_LITERALS: [&str; 4] = ["true", "1", "yes", "on"];
const FALSE_LITERALS: [&str; 4] = ["false", "0", "no", "off"];

/// Converts a raw string into a boolean.
///
/// Only the enumerated literals are accepted (case-insensitive, surrounding
/// whitespace ignored):
/// - `true`, `1`, `yes`, `on` → `true`
/// - `false`, `0`, `no`, `off` → `false`
pub fn coerce_bool(raw: &str) -> Result<bool, String> {
    let value = raw.trim().to_ascii_lowercase();

    if TRUE_LITERALS.contains(&value.as_str()) {
        return Ok(true);
    }
    if FALSE_LITERALS.contains(&value.as_str()) {
        return Ok(false);
    }

    Err(format!(
        "expected one of {} or {}",
        TRUE_LITERALS.join("/"),
        FALSE_LITERALS.join("/")
    ))
}

pub fn validate_port(raw: &str) -> Result<u16, String> {
    let port: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "port must be an integer".to_string())?;

    if port < i64::from(MIN_DB_PORT) || port > i64::from(MAX_DB_PORT) {
        return Err(format!(
            "port must be between {} and {}",
            MIN_DB_PORT, MAX_DB_PORT
        ));
    }

    Ok(port as u16)
}

pub fn validate_timeout(raw: &str) -> Result<u64, String> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| "timeout must be a non-negative integer number of seconds".to_string())?;

    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }

    Ok(secs)
}

/// Returns the trimmed value, or `None` when nothing but whitespace is left.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Free-text descriptions are stored trimmed; blank text is stored as absent.
pub fn normalize_description(raw: Option<&str>) -> Option<String> {
    non_blank(raw).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_bool_accepts_enumerated_literals() {
        for raw in ["true", "TRUE", "True", "1", "yes", "YES", " on "] {
            assert_eq!(coerce_bool(raw), Ok(true), "literal {raw:?}");
        }
        for raw in ["false", "FALSE", "0", "no", "No", "off"] {
            assert_eq!(coerce_bool(raw), Ok(false), "literal {raw:?}");
        }
    }

    #[test]
    fn test_coerce_bool_rejects_everything_else() {
        for raw in ["", "y", "n", "2", "enabled", "truee", "-1"] {
            assert!(coerce_bool(raw).is_err(), "literal {raw:?}");
        }
    }

    #[test]
    fn test_validate_port_bounds() {
        assert_eq!(validate_port("1"), Ok(1));
        assert_eq!(validate_port("5432"), Ok(5432));
        assert_eq!(validate_port("32767"), Ok(32767));

        assert!(validate_port("0").is_err());
        assert!(validate_port("32768").is_err());
        assert!(validate_port("65536").is_err());
        assert!(validate_port("-5").is_err());
        assert!(validate_port("postgres").is_err());
    }

    #[test]
    fn test_validate_timeout() {
        assert_eq!(validate_timeout("10"), Ok(10));
        assert!(validate_timeout("0").is_err());
        assert!(validate_timeout("ten").is_err());
    }

    #[test]
    fn test_normalize_description() {
        assert_eq!(normalize_description(None), None);
        assert_eq!(normalize_description(Some("")), None);
        assert_eq!(normalize_description(Some(" \t ")), None);
        assert_eq!(
            normalize_description(Some("  primary DC ")),
            Some("primary DC".to_string())
        );
    }
}
