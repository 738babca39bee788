//! Injectable key-value storage for per-shopper state.
//!
//! Checkout logic never talks to tower-sessions directly; it goes
//! through [`KeyValueStore`] so the address-resolution fallback can be
//! unit tested against an in-memory map.

use std::future::Future;

use serde_json::Value;
use tower_sessions::Session;

/// Get/set/clear access to a shopper's persisted keys.
///
/// Storage failures are absorbed: a failed read behaves like a missing
/// key and a failed write is logged and dropped. Cached state is an
/// optimization here, never a source of truth.
pub trait KeyValueStore: Send + Sync {
    /// Read a stored value.
    fn get(&self, key: &'static str) -> impl Future<Output = Option<Value>> + Send;

    /// Write a value under a key.
    fn set(&self, key: &'static str, value: Value) -> impl Future<Output = ()> + Send;

    /// Remove a key.
    fn clear(&self, key: &'static str) -> impl Future<Output = ()> + Send;
}

impl KeyValueStore for Session {
    fn get(&self, key: &'static str) -> impl Future<Output = Option<Value>> + Send {
        async move {
            match Session::get::<Value>(self, key).await {
                Ok(value) => value,
                Err(error) => {
                    tracing::debug!(%error, key, "session read failed");
                    None
                }
            }
        }
    }

    fn set(&self, key: &'static str, value: Value) -> impl Future<Output = ()> + Send {
        async move {
            if let Err(error) = Session::insert(self, key, value).await {
                tracing::debug!(%error, key, "session write failed");
            }
        }
    }

    fn clear(&self, key: &'static str) -> impl Future<Output = ()> + Send {
        async move {
            if let Err(error) = Session::remove::<Value>(self, key).await {
                tracing::debug!(%error, key, "session remove failed");
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory store for unit tests.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::{Future, KeyValueStore, Value};

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: Mutex<HashMap<&'static str, Value>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        #[allow(clippy::unwrap_used)]
        pub fn contains(&self, key: &str) -> bool {
            self.entries.lock().unwrap().contains_key(key)
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &'static str) -> impl Future<Output = Option<Value>> + Send {
            let value = self
                .entries
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .get(key)
                .cloned();
            async move { value }
        }

        fn set(&self, key: &'static str, value: Value) -> impl Future<Output = ()> + Send {
            self.entries
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .insert(key, value);
            async {}
        }

        fn clear(&self, key: &'static str) -> impl Future<Output = ()> + Send {
            self.entries
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .remove(key);
            async {}
        }
    }
}
