#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_handle;

pub use mock_handle::{name_server_row, MockDbHandle};
