mod cursor_scope;

pub use cursor_scope::{fetch_all_rows, CursorScope};
