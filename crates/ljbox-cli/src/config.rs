//! Layered configuration for the `run` command.
//!
//! Values are resolved per field with the precedence CLI flag, then `-S key=value`,
//! then the TOML file, then the built-in defaults.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
