//! Shared client utilities for configuration, HTTP access and errors.
//!
//! Feature clients go through [`api::ApiClient`] so every request gets the same
//! timeout, user agent and error mapping. Callers attach tokens explicitly;
//! nothing in here reads credentials on its own.

pub mod api;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
