mod db_handle;

pub use db_handle::{Capability, DbHandle, DbRow};
