//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `init` - Generate the instance config file
//! - `show` - Print the resolved configuration
//! - `check` - Validate the configuration

pub mod args;

pub use args::{Cli, Commands, ShowArgs};
