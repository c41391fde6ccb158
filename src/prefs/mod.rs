//! Small persisted preferences layered on a [`Store`].
//!
//! Each service owns one namespace and holds no state of its own; the
//! store is injected so tests can run against an in-memory database.

pub mod bookmarks;
pub mod history;
pub mod progress;
pub mod session;
pub mod social;
pub mod theme;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::app::Result;
use crate::store::Store;

pub use bookmarks::BookmarkService;
pub use history::SearchHistory;
pub use progress::ReadingProgressService;
pub use session::SessionService;
pub use social::SocialService;
pub use theme::ThemeService;

/// Typed view over a single namespace of a [`Store`].
pub struct Preferences<S> {
    store: Arc<S>,
    namespace: &'static str,
}

impl<S> Clone for Preferences<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            namespace: self.namespace,
        }
    }
}

impl<S: Store> Preferences<S> {
    pub fn new(store: Arc<S>, namespace: &'static str) -> Self {
        Self { store, namespace }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn string(&self, key: &str) -> Result<Option<String>> {
        self.store.get_value(self.namespace, key)
    }

    pub fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.store.put_value(self.namespace, key, value)
    }

    /// Integer stored under `key`. Unparsable values read as missing.
    pub fn i64(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.string(key)?.and_then(|raw| match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring non-integer {}/{}: {:?}", self.namespace, key, raw);
                None
            }
        }))
    }

    pub fn set_i64(&self, key: &str, value: i64) -> Result<()> {
        self.set_string(key, &value.to_string())
    }

    pub fn bool(&self, key: &str) -> Result<bool> {
        Ok(self.string(key)?.is_some_and(|raw| raw == "true"))
    }

    pub fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set_string(key, if value { "true" } else { "false" })
    }

    /// JSON document stored under `key`. Malformed documents read as missing.
    pub fn json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.string(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring malformed {}/{}: {}", self.namespace, key, e);
                Ok(None)
            }
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_string(key, &raw)
    }

    pub fn set(&self, key: &str) -> Result<BTreeSet<String>> {
        self.store.get_set(self.namespace, key)
    }

    pub fn put_set(&self, key: &str, members: &BTreeSet<String>) -> Result<()> {
        self.store.put_set(self.namespace, key, members)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.store.remove(self.namespace, key)
    }

    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        self.store.entries(self.namespace)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear_namespace(self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    fn prefs(namespace: &'static str) -> Preferences<SqliteStore> {
        Preferences::new(Arc::new(SqliteStore::in_memory().unwrap()), namespace)
    }

    #[test]
    fn test_typed_values() {
        let prefs = prefs("test");
        assert_eq!(prefs.i64("count").unwrap(), None);
        assert!(!prefs.bool("flag").unwrap());

        prefs.set_i64("count", -3).unwrap();
        prefs.set_bool("flag", true).unwrap();
        assert_eq!(prefs.i64("count").unwrap(), Some(-3));
        assert!(prefs.bool("flag").unwrap());
    }

    #[test]
    fn test_bad_values_read_as_missing() {
        let prefs = prefs("test");
        prefs.set_string("count", "many").unwrap();
        prefs.set_string("doc", "{not json").unwrap();
        assert_eq!(prefs.i64("count").unwrap(), None);
        assert_eq!(prefs.json::<Vec<String>>("doc").unwrap(), None);
    }

    #[test]
    fn test_json_round_trip() {
        let prefs = prefs("test");
        prefs.set_json("list", &["a", "b"]).unwrap();
        assert_eq!(
            prefs.json::<Vec<String>>("list").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_clear_only_touches_own_namespace() {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let first = Preferences::new(store.clone(), "first");
        let second = Preferences::new(store, "second");
        first.set_string("k", "1").unwrap();
        second.set_string("k", "2").unwrap();

        first.clear().unwrap();
        assert!(first.entries().unwrap().is_empty());
        assert_eq!(second.string("k").unwrap().as_deref(), Some("2"));
    }
}
