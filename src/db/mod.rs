pub mod migrations;
pub mod queries;
pub mod repository;

pub use repository::BookingRepository;

use anyhow::Context;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .context("failed to set database pragmas")?;

    register_functions(&conn).context("failed to register sql functions")?;

    migrations::run_migrations(&conn)?;

    Ok(conn)
}

/// `casefold(text)`: Unicode lowercase, used for case-insensitive search.
/// SQLite's own `lower()` and `LIKE` only fold ASCII.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "casefold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: String = ctx.get(0)?;
            Ok(text.to_lowercase())
        },
    )
}
