//! Common types shared by the configuration provider and its consumers.
//!
//! This crate provides:
//! - Unified configuration error handling
//! - Typed configuration sub-records (session, JWT, database)

pub mod config;
pub mod error;

pub use config::*;
pub use error::{ConfigError, ConfigResult};
