use super::CredentialStore;
use crate::app::AppError;
use secrecy::{ExposeSecret, SecretString};
use std::{collections::HashMap, sync::RwLock};

/// In-process store, used by tests and embedders that manage persistence themselves.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store that already holds a session token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.write() {
            values.insert(super::TOKEN_KEY.to_string(), token.to_string());
        }
        store
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<SecretString>, AppError> {
        let values = self
            .values
            .read()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))?;
        Ok(values.get(key).map(|value| SecretString::from(value.as_str())))
    }

    fn set(&self, key: &str, value: &SecretString) -> Result<(), AppError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.expose_secret().to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))?;
        values.remove(key);
        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<String> = self
            .values
            .read()
            .map(|values| values.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("MemoryStore").field("keys", &keys).finish()
    }
}
