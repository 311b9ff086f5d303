mod name_servers;
mod schema_version;
mod show_config;

pub use name_servers::{check_name_server, list_name_servers, show_name_server};
pub use schema_version::print_schema_version;
pub use show_config::show_config;
