//! taskman: a small SQLite-backed task manager.
//!
//! The library half of the `tm` binary. It owns the task database, a single
//! `tasks` table in a SQLite file, and exposes async CRUD over it. The
//! binary layers argument parsing and output on top.
//!
//! # Example
//!
//! ```no_run
//! use taskman::{StatusFilter, TaskStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> eyre::Result<()> {
//! let mut store = TaskStore::new("tasks.db");
//! store.open().await?;
//!
//! let id = store.create_task("Buy milk", Some("2025-06-01"), None).await?;
//! store.complete_task(id).await?;
//!
//! for task in store.list_tasks(Some(StatusFilter::Completed)).await? {
//!     println!("{}. {}", task.id, task.description);
//! }
//!
//! store.close().await?;
//! # Ok(())
//! # }
//! ```

mod store;
mod types;

// Re-export public API
pub use store::TaskStore;
pub use types::{StatusFilter, Task};
