/// Database row types — these map directly to SQLite rows.
/// Distinct from jotter-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct NoteRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub creation: String,
    pub last_edit: String,
}
