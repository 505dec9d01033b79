use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::Error;
use crate::models::{NewTodo, Todo};

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens the database at `path` and runs the idempotent migration, so
    /// the table exists after every connect regardless of restarts.
    pub fn connect<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let conn = Connection::open(path.as_ref())?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), Error> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                completed INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT
            );
            "#,
        )?;
        Ok(())
    }

    pub fn insert_todo(&self, new: &NewTodo) -> Result<Todo, Error> {
        let now = Utc::now();
        self.conn
            .execute(
                "INSERT INTO todos (name, completed, created_at) VALUES (?1, ?2, ?3)",
                params![new.name, new.completed, now.to_rfc3339()],
            )
            .map_err(integrity_or_db)?;
        let id = self.conn.last_insert_rowid();
        Ok(Todo {
            id,
            name: new.name.clone(),
            completed: new.completed,
            created_at: now,
            updated_at: None,
        })
    }

    pub fn list_todos(&self) -> Result<Vec<Todo>, Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, completed, created_at, updated_at FROM todos ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], row_to_todo)?;

        let mut todos = Vec::new();
        for todo in rows {
            todos.push(todo?);
        }
        Ok(todos)
    }

    pub fn get_todo(&self, id: i64) -> Result<Todo, Error> {
        self.conn
            .query_row(
                "SELECT id, name, completed, created_at, updated_at FROM todos WHERE id = ?1",
                params![id],
                row_to_todo,
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
                other => Error::Db(other),
            })
    }

    /// Overwrites `name` and `completed` and stamps `updated_at`.
    pub fn update_todo(&self, id: i64, new: &NewTodo) -> Result<(), Error> {
        let now = Utc::now().to_rfc3339();
        let updated = self.conn.execute(
            "UPDATE todos SET name = ?1, completed = ?2, updated_at = ?3 WHERE id = ?4",
            params![new.name, new.completed, now, id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    pub fn delete_todo(&self, id: i64) -> Result<(), Error> {
        let deleted = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    let created_at: String = row.get(3)?;
    let updated_at: Option<String> = row.get(4)?;
    Ok(Todo {
        id: row.get(0)?,
        name: row.get(1)?,
        completed: row.get(2)?,
        created_at: parse_datetime(&created_at),
        updated_at: updated_at.map(|value| parse_datetime(&value)),
    })
}

fn integrity_or_db(err: rusqlite::Error) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Error::Integrity
        }
        other => Error::Db(other),
    }
}

fn parse_datetime(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
