//! Shared types, errors, and configuration for Abaco.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types with HTTP status mapping
//! - Configuration management (files + environment)

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
