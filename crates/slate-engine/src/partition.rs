//! Status partition and per-column ordering.
//!
//! Tasks are grouped by status (stable, preserving filtered order), then
//! each column is sorted independently with one comparator chain:
//!
//! 1. `Manual` compares by the sort key (`order`, falling back to
//!    `created_at`) and nothing else.
//! 2. Otherwise favorites sort first, regardless of the primary key.
//! 3. The primary key from the [`SortOption`] applies.
//! 4. Ties fall back to the sort key; keys that are exactly equal resolve
//!    by input order (the sort is stable).

use std::cmp::Ordering;

use chrono::{DateTime, Local};
use slate_core::{Task, TaskStatus};

use crate::criteria::{FilterCriteria, SortOption};
use crate::filter;

/// The three ordered columns, ready for rendering.
#[derive(Clone, Debug, Default)]
pub struct Board<'a> {
    /// Tasks in the todo column.
    pub todo: Vec<&'a Task>,
    /// Tasks in the in-progress column.
    pub in_progress: Vec<&'a Task>,
    /// Tasks in the done column.
    pub done: Vec<&'a Task>,
}

impl<'a> Board<'a> {
    /// The column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Total task count across all three columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Whether every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `tasks` by status and sort each column with `sort`.
///
/// The union of the three columns is exactly the input, with no
/// duplicates or omissions.
pub fn partition<'a, I>(tasks: I, sort: SortOption) -> Board<'a>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut board = Board::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => board.todo.push(task),
            TaskStatus::InProgress => board.in_progress.push(task),
            TaskStatus::Done => board.done.push(task),
        }
    }
    board.todo.sort_by(|a, b| compare(a, b, sort));
    board.in_progress.sort_by(|a, b| compare(a, b, sort));
    board.done.sort_by(|a, b| compare(a, b, sort));
    board
}

/// Filter then partition — the single call the board view needs per render.
#[must_use]
pub fn filter_and_partition<'a>(
    tasks: &'a [Task],
    criteria: &FilterCriteria,
    sort: SortOption,
) -> Board<'a> {
    partition(filter::filter(tasks, criteria), sort)
}

/// Fixed-clock variant of [`filter_and_partition`] for calendar-bucket tests.
#[must_use]
pub fn filter_and_partition_at<'a>(
    tasks: &'a [Task],
    criteria: &FilterCriteria,
    sort: SortOption,
    now: DateTime<Local>,
) -> Board<'a> {
    partition(filter::filter_at(tasks, criteria, now), sort)
}

/// The full comparator chain for one column.
fn compare(a: &Task, b: &Task, sort: SortOption) -> Ordering {
    if sort == SortOption::Manual {
        return a.sort_key().total_cmp(&b.sort_key());
    }
    b.is_favorite
        .cmp(&a.is_favorite)
        .then_with(|| primary(a, b, sort))
        .then_with(|| a.sort_key().total_cmp(&b.sort_key()))
}

/// The sort option's primary key. `Manual` never reaches here.
fn primary(a: &Task, b: &Task, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Manual => Ordering::Equal,
        SortOption::PriorityAsc => a.priority.rank().cmp(&b.priority.rank()),
        SortOption::PriorityDesc => b.priority.rank().cmp(&a.priority.rank()),
        SortOption::CreatedDesc => b.created_at.cmp(&a.created_at),
        SortOption::DueAsc => match (a.due_date, b.due_date) {
            // A deadline always sorts before no deadline.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(da), Some(db)) => da.cmp(&db),
            (None, None) => Ordering::Equal,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
