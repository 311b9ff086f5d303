//! Runtime configuration of the DNS administration tool
//!
//! Values come from three sources, merged per field in this order of
//! precedence (lowest first):
//! - `defaults`: built-in constants ([`ConfigDefaults`])
//! - `file`: the sparse layer read from the configuration file
//! - `cli`: the sparse layer built from command-line flags
//!
//! The result is an immutable [`EffectiveConfig`].

pub mod defaults;
pub mod effective;
pub mod layer;
mod resolver;

pub use defaults::ConfigDefaults;
pub use effective::EffectiveConfig;
pub use layer::ConfigLayer;
