//! Shared types, errors, and configuration for the Zakah report service.
//!
//! This crate provides common types used across all other crates:
//! - Money display with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, GENERIC_FAILURE_MESSAGE};
pub use types::{CurrencyCode, Money};
