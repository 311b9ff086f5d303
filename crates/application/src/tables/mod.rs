mod name_server_table;

pub use name_server_table::{NameServerTable, NAME_SERVER_TABLE};
