pub mod sqlite;

use std::collections::BTreeSet;

use crate::app::Result;

pub use sqlite::SqliteStore;

/// Namespaced key-value storage for local preferences.
///
/// Each key holds either a scalar value or a string set. Keys are
/// independent; nothing spans more than one key atomically.
pub trait Store {
    // Scalar values
    fn get_value(&self, namespace: &str, key: &str) -> Result<Option<String>>;
    fn put_value(&self, namespace: &str, key: &str, value: &str) -> Result<()>;
    fn entries(&self, namespace: &str) -> Result<Vec<(String, String)>>;

    // String sets
    fn get_set(&self, namespace: &str, key: &str) -> Result<BTreeSet<String>>;
    fn put_set(&self, namespace: &str, key: &str, members: &BTreeSet<String>) -> Result<()>;

    /// Drop both the value and the set stored under `key`.
    fn remove(&self, namespace: &str, key: &str) -> Result<()>;
    fn clear_namespace(&self, namespace: &str) -> Result<()>;
}
