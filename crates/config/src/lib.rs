//! Configuration management for the Smart Nicosia client.
//!
//! This crate provides types and loaders for assembling client configuration
//! from `.env` files, environment variables, and programmatic overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, ExampleDefaults, TlsPolicy};
