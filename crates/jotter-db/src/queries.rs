use crate::Database;
use crate::models::{NoteRow, UserRow};
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    // -- Users --

    pub fn create_user(&self, username: &str, email: &str, password_hash: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (username, email, password) VALUES (?1, ?2, ?3)",
                (username, email, password_hash),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_username(conn, username))
    }

    // -- Notes --

    /// Insert a note and return its assigned id. The id column is a rowid
    /// alias, so SQLite picks max(id)+1 within the INSERT.
    pub fn insert_note(
        &self,
        title: &str,
        content: &str,
        creation: &str,
        last_edit: &str,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO notes (title, content, creation, last_edit) VALUES (?1, ?2, ?3, ?4)",
                (title, content, creation, last_edit),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_notes(&self) -> Result<Vec<NoteRow>> {
        self.with_conn(query_notes)
    }

    pub fn get_note(&self, id: i64) -> Result<Option<NoteRow>> {
        self.with_conn(|conn| query_note_by_id(conn, id))
    }

    /// Overwrite title/content and bump last_edit; creation is untouched.
    /// Returns false when no note matched the id.
    pub fn update_note(&self, id: i64, title: &str, content: &str, last_edit: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE notes SET title = ?1, content = ?2, last_edit = ?3 WHERE id = ?4",
                (title, content, last_edit, id),
            )?;
            Ok(changed > 0)
        })
    }

    /// Delete-by-id is idempotent: deleting a missing note is not an error.
    pub fn delete_note(&self, id: i64) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
            Ok(())
        })
    }
}

fn query_user_by_username(conn: &Connection, username: &str) -> Result<Option<UserRow>> {
    let mut stmt =
        conn.prepare("SELECT id, username, email, password FROM users WHERE username = ?1")?;

    let row = stmt
        .query_row([username], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_notes(conn: &Connection) -> Result<Vec<NoteRow>> {
    let mut stmt =
        conn.prepare("SELECT id, title, content, creation, last_edit FROM notes ORDER BY id")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(NoteRow {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                creation: row.get(3)?,
                last_edit: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_note_by_id(conn: &Connection, id: i64) -> Result<Option<NoteRow>> {
    let mut stmt =
        conn.prepare("SELECT id, title, content, creation, last_edit FROM notes WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(NoteRow {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                creation: row.get(3)?,
                last_edit: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
