use std::sync::Arc;

use crate::app::Result;
use crate::prefs::Preferences;
use crate::store::Store;

const NAMESPACE: &str = "search_history";
const KEY_HISTORY: &str = "search_history";

pub const MAX_ENTRIES: usize = 5;

/// Recent search queries, most recent first.
///
/// Older installs kept the history as an unordered string set under the
/// same key. That set is converted into the ordered list the first time
/// the history is read.
pub struct SearchHistory<S> {
    prefs: Preferences<S>,
}

impl<S: Store> SearchHistory<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            prefs: Preferences::new(store, NAMESPACE),
        }
    }

    pub fn entries(&self) -> Result<Vec<String>> {
        if let Some(entries) = self.prefs.json::<Vec<String>>(KEY_HISTORY)? {
            return Ok(entries);
        }
        self.migrate_legacy_set()
    }

    fn migrate_legacy_set(&self) -> Result<Vec<String>> {
        let legacy = self.prefs.set(KEY_HISTORY)?;
        if legacy.is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<String> = legacy
            .iter()
            .map(|q| q.trim())
            .filter(|q| !q.is_empty())
            .take(MAX_ENTRIES)
            .map(str::to_string)
            .collect();

        self.prefs.put_set(KEY_HISTORY, &Default::default())?;
        self.prefs.set_json(KEY_HISTORY, &entries)?;
        tracing::info!("Migrated {} legacy search history entries", entries.len());

        Ok(entries)
    }

    /// Record `query` as the most recent search. Blank queries are ignored.
    pub fn add(&self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let mut entries = self.entries()?;
        entries.retain(|q| q != query);
        entries.insert(0, query.to_string());
        entries.truncate(MAX_ENTRIES);
        self.prefs.set_json(KEY_HISTORY, &entries)
    }

    pub fn remove(&self, query: &str) -> Result<()> {
        let query = query.trim();
        let mut entries = self.entries()?;
        entries.retain(|q| q != query);
        self.prefs.set_json(KEY_HISTORY, &entries)
    }

    pub fn clear(&self) -> Result<()> {
        self.prefs.remove(KEY_HISTORY)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.entries()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::store::SqliteStore;

    fn history() -> (Arc<SqliteStore>, SearchHistory<SqliteStore>) {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        (store.clone(), SearchHistory::new(store))
    }

    #[test]
    fn test_most_recent_first_and_capped() {
        let (_, history) = history();
        for q in ["one", "two", "three", "four", "five", "six"] {
            history.add(q).unwrap();
        }
        assert_eq!(history.entries().unwrap(), vec!["six", "five", "four", "three", "two"]);
    }

    #[test]
    fn test_repeat_moves_to_front() {
        let (_, history) = history();
        history.add("rust").unwrap();
        history.add("android").unwrap();
        history.add("  rust ").unwrap();
        assert_eq!(history.entries().unwrap(), vec!["rust", "android"]);
    }

    #[test]
    fn test_blank_is_ignored() {
        let (_, history) = history();
        history.add("   ").unwrap();
        assert!(history.is_empty().unwrap());
    }

    #[test]
    fn test_remove_and_clear() {
        let (_, history) = history();
        history.add("a").unwrap();
        history.add("b").unwrap();
        history.remove("a").unwrap();
        assert_eq!(history.entries().unwrap(), vec!["b"]);
        history.clear().unwrap();
        assert!(history.is_empty().unwrap());
    }

    #[test]
    fn test_legacy_set_is_migrated_once() {
        let (store, history) = history();
        let legacy: BTreeSet<String> = ["zeta", "alpha", "mid", "beta", "gamma", "omega"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        store.put_set(NAMESPACE, KEY_HISTORY, &legacy).unwrap();

        let entries = history.entries().unwrap();
        assert_eq!(entries, vec!["alpha", "beta", "gamma", "mid", "omega"]);
        assert!(store.get_set(NAMESPACE, KEY_HISTORY).unwrap().is_empty());

        history.add("new").unwrap();
        assert_eq!(history.entries().unwrap()[0], "new");
        assert_eq!(history.entries().unwrap().len(), MAX_ENTRIES);
    }
}
