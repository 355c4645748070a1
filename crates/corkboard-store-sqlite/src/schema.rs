//! SQL schema for the Corkboard SQLite store.
//!
//! Executed once at connection startup. Join tables reference their entities
//! but declare no `ON DELETE` action: removing dependent join rows is the job
//! of the delete operations in `corkboard-core`, and the foreign keys only
//! reject a delete that would leave a dangling reference.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS boards (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS columns (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS notes (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    text        TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL
);

-- A column placed on a board.
CREATE TABLE IF NOT EXISTS boards_content (
    id          TEXT PRIMARY KEY,
    board_id    TEXT NOT NULL REFERENCES boards(id),
    column_id   TEXT NOT NULL REFERENCES columns(id),
    created_at  TEXT NOT NULL,
    UNIQUE (board_id, column_id)
);

-- A note placed in a column.
CREATE TABLE IF NOT EXISTS columns_content (
    id          TEXT PRIMARY KEY,
    column_id   TEXT NOT NULL REFERENCES columns(id),
    note_id     TEXT NOT NULL REFERENCES notes(id),
    created_at  TEXT NOT NULL,
    UNIQUE (column_id, note_id)
);

CREATE INDEX IF NOT EXISTS boards_content_column_idx ON boards_content(column_id);
CREATE INDEX IF NOT EXISTS columns_content_note_idx  ON columns_content(note_id);

PRAGMA user_version = 1;
";
