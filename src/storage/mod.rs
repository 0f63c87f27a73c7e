//! Persistent key-value storage for client credentials.
//!
//! The store plays the role browser local storage plays for a web client: a
//! flat string-to-string map that survives restarts. Only [`TOKEN_KEY`] is used
//! today. Values come back as [`SecretString`] so they cannot end up in logs by
//! accident.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::app::AppError;
use secrecy::{ExposeSecret, SecretString};

/// Key under which the session token is kept.
pub const TOKEN_KEY: &str = "token";

pub trait CredentialStore: Send + Sync {
    /// Reads a value. Missing keys return `Ok(None)`.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<SecretString>, AppError>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing store cannot be written.
    fn set(&self, key: &str, value: &SecretString) -> Result<(), AppError>;

    /// Removes a value. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), AppError>;

    /// Reads the session token, treating blank values as absent.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing store cannot be read.
    fn token(&self) -> Result<Option<SecretString>, AppError> {
        Ok(self
            .get(TOKEN_KEY)?
            .filter(|token| !token.expose_secret().trim().is_empty()))
    }
}
