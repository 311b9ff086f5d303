mod schema_version;

pub use schema_version::{SchemaVersionQuery, SCHEMA_VERSION_QUERY};
