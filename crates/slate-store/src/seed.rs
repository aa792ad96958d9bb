//! Default sample tasks.
//!
//! Used whenever no usable persisted record exists: first run, a corrupt
//! record, or a record whose `tasks` field is not an array.

use slate_core::{Priority, Task, TaskId, TaskStatus};

/// Build the sample task set, stamped with `now_ms`.
#[must_use]
pub fn seed_tasks(now_ms: i64) -> Vec<Task> {
    let samples = [
        (
            "1",
            "Research Competitors",
            "Analyze top 3 competitors.",
            TaskStatus::Todo,
            Priority::High,
        ),
        (
            "2",
            "Draft Design System",
            "Define colors and typography.",
            TaskStatus::Todo,
            Priority::Medium,
        ),
        (
            "3",
            "Setup Repo",
            "Initialize project.",
            TaskStatus::InProgress,
            Priority::High,
        ),
        (
            "4",
            "Implement Auth",
            "Login and Signup pages.",
            TaskStatus::Done,
            Priority::High,
        ),
    ];

    samples
        .into_iter()
        .map(|(id, title, description, status, priority)| Task {
            id: TaskId::from(id),
            title: title.to_string(),
            description: Some(description.to_string()),
            status,
            priority,
            created_at: now_ms,
            updated_at: now_ms,
            due_date: None,
            tags: Vec::new(),
            assignee: None,
            is_favorite: false,
            order: None,
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
