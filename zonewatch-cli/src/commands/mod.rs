//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`evaluate`] - Evaluate one position
//! - [`watch`] - Poll a location source continuously
//! - [`zones`] - List the zone registry

pub mod common;
pub mod config;
pub mod evaluate;
pub mod watch;
pub mod zones;
