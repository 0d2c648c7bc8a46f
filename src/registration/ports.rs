use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{AppPage, RegisterBody};

pub const STORAGE_FIRST_NAME: &str = "firstName";
pub const STORAGE_PAGE: &str = "page";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,
    #[error("Storage write failed: {0}")]
    Write(String),
    #[error("Storage read failed: {0}")]
    Read(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Registration rejected: {0}")]
    Rejected(String),
    #[error("Network error: {0}")]
    Network(String),
}

/// Backend endpoints the registration screen posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    RegisterOauth,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Register => "/register",
            Endpoint::RegisterOauth => "/register-oauth",
        }
    }
}

/// Persistent key-value storage of the host app.
#[async_trait(?Send)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[async_trait(?Send)]
pub trait RegistrationApi {
    async fn post(&self, endpoint: Endpoint, body: &RegisterBody) -> Result<(), ApiError>;
}

pub trait Navigator {
    fn navigate_to(&self, page: AppPage);
}

pub trait Notifier {
    fn show_transient_message(&self, text: &str);
}

pub trait Viewport {
    fn scroll_to_top(&self);
}

/// Volatile store, used during server rendering and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryStore::with_entry(STORAGE_FIRST_NAME, "Ada");
        assert_eq!(store.get(STORAGE_FIRST_NAME).await.unwrap().as_deref(), Some("Ada"));
        assert_eq!(store.get(STORAGE_PAGE).await.unwrap(), None);

        store.set(STORAGE_PAGE, "2").await.unwrap();
        assert_eq!(store.get(STORAGE_PAGE).await.unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::Register.path(), "/register");
        assert_eq!(Endpoint::RegisterOauth.path(), "/register-oauth");
    }
}
