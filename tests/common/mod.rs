//! Shared test infrastructure for taskman integration tests.
//!
//! Provides TestEnv helper for consistent test setup/teardown.

#![allow(dead_code)]

use taskman::{StatusFilter, Task, TaskStore};
use tempfile::TempDir;

/// Test environment with automatic cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub store: TaskStore,
}

impl TestEnv {
    /// Create a new test environment with an opened store.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = TaskStore::new(temp_dir.path().join("tasks.db"));
        store.open().await.expect("Failed to open store");
        Self { temp_dir, store }
    }

    /// Add a task with no due date or priority.
    pub async fn add_task(&self, description: &str) -> i64 {
        self.store
            .create_task(description, None, None)
            .await
            .expect("Failed to create task")
    }

    /// Add a task with a due date and priority.
    pub async fn add_task_with_fields(&self, description: &str, due: &str, priority: &str) -> i64 {
        self.store
            .create_task(description, Some(due), Some(priority))
            .await
            .expect("Failed to create task")
    }

    /// Fetch every task, oldest first.
    pub async fn all_tasks(&self) -> Vec<Task> {
        self.store
            .list_tasks(None)
            .await
            .expect("Failed to list tasks")
    }

    /// Fetch a single task by id, panicking if it does not exist.
    pub async fn get_task(&self, id: i64) -> Task {
        self.all_tasks()
            .await
            .into_iter()
            .find(|t| t.id == id)
            .unwrap_or_else(|| panic!("No task with id {id}"))
    }

    /// Count all tasks.
    pub async fn total_count(&self) -> usize {
        self.all_tasks().await.len()
    }

    /// Count tasks matching a status filter.
    pub async fn count_by_status(&self, filter: StatusFilter) -> usize {
        self.store
            .list_tasks(Some(filter))
            .await
            .expect("Failed to list tasks")
            .len()
    }

    /// Assert that a task shows up under the given status filter.
    pub async fn assert_listed_as(&self, id: i64, filter: StatusFilter) {
        let tasks = self
            .store
            .list_tasks(Some(filter))
            .await
            .expect("Failed to list tasks");
        assert!(
            tasks.iter().any(|t| t.id == id),
            "Expected task {id} to be listed as {filter}, but it wasn't. Listed: {:?}",
            tasks.iter().map(|t| t.id).collect::<Vec<_>>()
        );
    }

    /// Assert that a task does NOT show up under the given status filter.
    pub async fn assert_not_listed_as(&self, id: i64, filter: StatusFilter) {
        let tasks = self
            .store
            .list_tasks(Some(filter))
            .await
            .expect("Failed to list tasks");
        assert!(
            !tasks.iter().any(|t| t.id == id),
            "Expected task {id} to NOT be listed as {filter}, but it was"
        );
    }
}
