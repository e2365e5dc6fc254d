//! SQLite session storage: a `config` key/value table holding the token and user.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::client_log;
use crate::error::{ClientError, Result};
use crate::models::{Session, User};
use crate::session::SessionStore;

const DB_FILE: &str = "eventbook.db";
const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

pub struct SqliteSessionStore {
    conn: Mutex<Connection>,
}

impl SqliteSessionStore {
    /// Opens (creating if needed) `eventbook.db` inside `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| ClientError::Storage(e.to_string()))?;
        let db_path = dir.join(DB_FILE);
        client_log!("[eventbook] storage open db={:?}", db_path);
        let conn = Connection::open(&db_path)?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn config_get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn();
        let value = conn
            .query_row("SELECT value FROM config WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    pub fn config_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn config_remove(&self, key: &str) -> Result<()> {
        self.conn().execute("DELETE FROM config WHERE key = ?1", params![key])?;
        Ok(())
    }
}

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS config (key TEXT PRIMARY KEY, value TEXT);")?;
    Ok(())
}

impl SessionStore for SqliteSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let token = match self.config_get(TOKEN_KEY)? {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(None),
        };
        let user = match self.config_get(USER_KEY)? {
            Some(json) => serde_json::from_str::<User>(&json)?,
            None => return Ok(None),
        };
        Ok(Some(Session { token, user }))
    }

    fn save(&self, session: &Session) -> Result<()> {
        let user_json = serde_json::to_string(&session.user)?;
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        for (key, value) in [(TOKEN_KEY, session.token.as_str()), (USER_KEY, user_json.as_str())] {
            tx.execute(
                "INSERT INTO config (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2",
                params![key, value],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.config_remove(TOKEN_KEY)?;
        self.config_remove(USER_KEY)
    }
}
