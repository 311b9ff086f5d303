//! DNS administration application layer
pub mod ports;
pub mod queries;
pub mod services;
pub mod tables;
