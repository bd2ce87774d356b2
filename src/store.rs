//! SQLite-backed storage for tasks.
//!
//! `TaskStore` owns the database handle for one CLI invocation. Opening is
//! memoized through a one-shot guard: the first caller creates the file and
//! ensures the schema, repeated or concurrent callers await that same
//! attempt, and a failed open leaves the guard unset so a later call can
//! retry. Closing is idempotent and resets the guard.

use crate::types::{StatusFilter, Task};
use eyre::{Context, Result, bail};
use log::{info, warn};
use rusqlite::{Connection, params};
use std::path::PathBuf;
use tokio::sync::OnceCell;

/// Base schema. `due` and `priority` arrived after the first release, so
/// they are ensured separately and older database files pick them up on open.
const BASE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    completed INTEGER DEFAULT 0
)";

/// Handle to the task database.
pub struct TaskStore {
    path: PathBuf,
    conn: OnceCell<Connection>,
}

impl TaskStore {
    /// Create a handle for the database at `path`. Nothing is opened until
    /// [`open`](Self::open) or the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: OnceCell::new(),
        }
    }

    /// Open the database, creating the file and the `tasks` table if needed.
    ///
    /// Idempotent: a second call on an already-open store is a no-op
    /// success. A failure to open or to create the base table propagates and
    /// resets the memoized state, so open can be retried later.
    pub async fn open(&self) -> Result<()> {
        self.connection().await.map(|_| ())
    }

    /// Close the database, releasing the handle.
    ///
    /// Idempotent: closing when nothing is open is a no-op success. After a
    /// close the store can be reopened by a later call.
    pub async fn close(&mut self) -> Result<()> {
        match self.conn.take() {
            None => Ok(()),
            Some(conn) => match conn.close() {
                Ok(()) => {
                    info!("closed task database");
                    Ok(())
                }
                // The handle is released either way; the connection handed
                // back in the error is dropped.
                Err((_conn, e)) => Err(e).context("Failed to close task database"),
            },
        }
    }

    /// Insert a new pending task and return its freshly assigned id.
    pub async fn create_task(
        &self,
        description: &str,
        due: Option<&str>,
        priority: Option<&str>,
    ) -> Result<i64> {
        if description.is_empty() {
            bail!("task description cannot be empty");
        }
        let conn = self.connection().await?;
        conn.execute(
            "INSERT INTO tasks (description, due, priority) VALUES (?, ?, ?)",
            params![description, due, priority],
        )
        .context("Failed to insert task")?;
        Ok(conn.last_insert_rowid())
    }

    /// List tasks in ascending id order, optionally restricted to one
    /// completion state. Zero rows is a valid outcome, not an error.
    pub async fn list_tasks(&self, filter: Option<StatusFilter>) -> Result<Vec<Task>> {
        let conn = self.connection().await?;
        let sql = match filter {
            None => "SELECT id, description, completed, due, priority FROM tasks ORDER BY id ASC",
            Some(StatusFilter::Pending) => {
                "SELECT id, description, completed, due, priority FROM tasks \
                 WHERE completed = 0 ORDER BY id ASC"
            }
            Some(StatusFilter::Completed) => {
                "SELECT id, description, completed, due, priority FROM tasks \
                 WHERE completed = 1 ORDER BY id ASC"
            }
        };

        let mut stmt = conn.prepare(sql).context("Failed to prepare task query")?;
        let tasks = stmt
            .query_map([], Self::row_to_task)
            .context("Failed to list tasks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read task rows")?;
        Ok(tasks)
    }

    /// Mark the task with `id` as completed. Returns false when no row
    /// matched; that is a Not-Found outcome, not an error.
    pub async fn complete_task(&self, id: i64) -> Result<bool> {
        let conn = self.connection().await?;
        let changed = conn
            .execute("UPDATE tasks SET completed = 1 WHERE id = ?", params![id])
            .context("Failed to complete task")?;
        Ok(changed > 0)
    }

    /// Overwrite the description of the task with `id`, leaving every other
    /// field alone. Returns false when no row matched.
    pub async fn edit_task(&self, id: i64, new_description: &str) -> Result<bool> {
        let conn = self.connection().await?;
        let changed = conn
            .execute(
                "UPDATE tasks SET description = ? WHERE id = ?",
                params![new_description, id],
            )
            .context("Failed to edit task")?;
        Ok(changed > 0)
    }

    /// Delete the task with `id` permanently. Returns false when no row
    /// matched.
    pub async fn delete_task(&self, id: i64) -> Result<bool> {
        let conn = self.connection().await?;
        let changed = conn
            .execute("DELETE FROM tasks WHERE id = ?", params![id])
            .context("Failed to delete task")?;
        Ok(changed > 0)
    }

    /// The memoized open. Every operation funnels through here, so the
    /// first use after construction (or after a close) performs the real
    /// open and everyone else reuses the same connection.
    async fn connection(&self) -> Result<&Connection> {
        self.conn
            .get_or_try_init(|| async {
                let conn = Connection::open(&self.path).with_context(|| {
                    format!("Failed to open task database at {}", self.path.display())
                })?;
                ensure_schema(&conn)?;
                info!("connected to task database at {}", self.path.display());
                Ok(conn)
            })
            .await
    }

    /// Convert a database row to a [`Task`].
    fn row_to_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            description: row.get(1)?,
            completed: row.get(2)?,
            due: row.get(3)?,
            priority: row.get(4)?,
        })
    }
}

/// Create the base table and make sure the additive columns exist.
fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(BASE_SCHEMA, [])
        .context("Failed to create tasks table")?;
    ensure_column(conn, "due");
    ensure_column(conn, "priority");
    Ok(())
}

/// Add a nullable TEXT column to the tasks table if it is not there yet.
///
/// SQLite has no `ADD COLUMN IF NOT EXISTS`, so the add is attempted and a
/// "duplicate column name" failure means the column already exists. Any
/// other failure is a warning; the store stays usable without the column.
fn ensure_column(conn: &Connection, name: &str) {
    let sql = format!("ALTER TABLE tasks ADD COLUMN {name} TEXT");
    if let Err(e) = conn.execute(&sql, [])
        && !e.to_string().contains("duplicate column name")
    {
        warn!("could not add {name} column to tasks table: {e}");
    }
}
