use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use rusqlite_migration::{Migrations, M};

use crate::app::{NewsdeskError, Result};
use crate::store::Store;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.conn()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| NewsdeskError::Other(format!("Migration failed: {}", e)))?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            NewsdeskError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }
}

impl Store for SqliteStore {
    fn get_value(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;

        let value = conn
            .query_row(
                "SELECT value FROM preferences WHERE namespace = ?1 AND key = ?2",
                params![namespace, key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn put_value(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO preferences (namespace, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(namespace, key) DO UPDATE SET value = ?3, updated_at = ?4",
            params![namespace, key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn entries(&self, namespace: &str) -> Result<Vec<(String, String)>> {
        let conn = self.conn()?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM preferences WHERE namespace = ?1 ORDER BY key")?;

        let entries = stmt
            .query_map(params![namespace], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn get_set(&self, namespace: &str, key: &str) -> Result<BTreeSet<String>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT member FROM preference_sets WHERE namespace = ?1 AND key = ?2",
        )?;

        let members = stmt
            .query_map(params![namespace, key], |row| row.get(0))?
            .collect::<std::result::Result<BTreeSet<String>, _>>()?;

        Ok(members)
    }

    fn put_set(&self, namespace: &str, key: &str, members: &BTreeSet<String>) -> Result<()> {
        let mut conn = self.conn()?;

        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM preference_sets WHERE namespace = ?1 AND key = ?2",
            params![namespace, key],
        )?;
        for member in members {
            tx.execute(
                "INSERT INTO preference_sets (namespace, key, member) VALUES (?1, ?2, ?3)",
                params![namespace, key, member],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn remove(&self, namespace: &str, key: &str) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "DELETE FROM preferences WHERE namespace = ?1 AND key = ?2",
            params![namespace, key],
        )?;
        conn.execute(
            "DELETE FROM preference_sets WHERE namespace = ?1 AND key = ?2",
            params![namespace, key],
        )?;

        Ok(())
    }

    fn clear_namespace(&self, namespace: &str) -> Result<()> {
        let conn = self.conn()?;

        conn.execute("DELETE FROM preferences WHERE namespace = ?1", params![namespace])?;
        conn.execute(
            "DELETE FROM preference_sets WHERE namespace = ?1",
            params![namespace],
        )?;

        Ok(())
    }
}
