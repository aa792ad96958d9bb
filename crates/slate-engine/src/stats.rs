//! Aggregate board statistics for the activity panel.

use slate_core::{Priority, Task, TaskStatus};

/// Counts over the full (unfiltered) task collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardStats {
    /// All tasks.
    pub total: usize,
    /// Tasks in the todo column.
    pub todo: usize,
    /// Tasks in the in-progress column.
    pub in_progress: usize,
    /// Tasks in the done column.
    pub done: usize,
    /// High-priority tasks.
    pub high: usize,
    /// Medium-priority tasks.
    pub medium: usize,
    /// Low-priority tasks.
    pub low: usize,
}

impl BoardStats {
    /// Tally one pass over `tasks`.
    #[must_use]
    pub fn collect(tasks: &[Task]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.status {
                TaskStatus::Todo => stats.todo += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Done => stats.done += 1,
            }
            match task.priority {
                Priority::High => stats.high += 1,
                Priority::Medium => stats.medium += 1,
                Priority::Low => stats.low += 1,
            }
        }
        stats
    }

    /// Share of done tasks as a rounded whole percentage; 0 when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn completion_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.done as f64 / self.total as f64) * 100.0).round() as u8
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::TaskId;

    fn task(status: TaskStatus, priority: Priority) -> Task {
        Task {
            id: TaskId::new(),
            title: "t".to_string(),
            description: None,
            status,
            priority,
            created_at: 0,
            updated_at: 0,
            due_date: None,
            tags: Vec::new(),
            assignee: None,
            is_favorite: false,
            order: None,
        }
    }

    #[test]
    fn empty_collection() {
        let stats = BoardStats::collect(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_percent(), 0);
    }

    #[test]
    fn tallies_status_and_priority() {
        let tasks = vec![
            task(TaskStatus::Todo, Priority::High),
            task(TaskStatus::InProgress, Priority::Medium),
            task(TaskStatus::Done, Priority::High),
            task(TaskStatus::Done, Priority::Low),
        ];
        let stats = BoardStats::collect(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.todo, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.done, 2);
        assert_eq!(stats.high, 2);
        assert_eq!(stats.medium, 1);
        assert_eq!(stats.low, 1);
        assert_eq!(stats.completion_percent(), 50);
    }

    #[test]
    fn completion_percent_rounds() {
        let tasks = vec![
            task(TaskStatus::Done, Priority::Medium),
            task(TaskStatus::Todo, Priority::Medium),
            task(TaskStatus::Todo, Priority::Medium),
        ];
        // 1/3 -> 33%
        assert_eq!(BoardStats::collect(&tasks).completion_percent(), 33);
    }
}
