use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY,
            username    TEXT NOT NULL UNIQUE,
            email       TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL
        );

        -- id is a rowid alias: SQLite assigns max(id)+1 (1 for an empty
        -- table) inside the INSERT itself, so concurrent creates cannot
        -- observe the same last id.
        CREATE TABLE IF NOT EXISTS notes (
            id          INTEGER PRIMARY KEY,
            title       TEXT NOT NULL,
            content     TEXT NOT NULL,
            creation    TEXT NOT NULL,
            last_edit   TEXT NOT NULL
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
