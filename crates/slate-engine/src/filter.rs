//! Pure, order-preserving task filtering.
//!
//! `filter` walks the collection once and keeps every task that satisfies
//! ALL active predicates. Relative input order is preserved — sorting is the
//! partition engine's job. Filtering is idempotent, and filtering by two
//! criteria sets in sequence equals filtering by their conjunction.

use chrono::{DateTime, Local};
use slate_core::time::{self, DAY_MS};
use slate_core::{Task, TaskStatus};

use crate::criteria::{DateBucket, FilterCriteria, SearchScope};

/// Filter `tasks` against `criteria` at the current local time.
#[must_use]
pub fn filter<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    filter_at(tasks, criteria, time::now_local())
}

/// Filter `tasks` against `criteria`, evaluating the date bucket relative
/// to `now`. Split out so the calendar predicates are testable with a
/// fixed clock.
#[must_use]
pub fn filter_at<'a>(
    tasks: &'a [Task],
    criteria: &FilterCriteria,
    now: DateTime<Local>,
) -> Vec<&'a Task> {
    tasks.iter().filter(|t| matches(t, criteria, now)).collect()
}

/// Whether a single task passes every active predicate.
fn matches(task: &Task, criteria: &FilterCriteria, now: DateTime<Local>) -> bool {
    matches_search(task, criteria)
        && matches_priority(task, criteria)
        && matches_tags(task, criteria)
        && (!criteria.favorites_only || task.is_favorite)
        && !(criteria.hide_done && task.status == TaskStatus::Done)
        && matches_due(task, criteria.due, now)
}

fn matches_search(task: &Task, criteria: &FilterCriteria) -> bool {
    let query = criteria.search.query.to_lowercase();
    if query.is_empty() {
        return true;
    }
    let in_title = || task.title.to_lowercase().contains(&query);
    let in_description = || {
        task.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query))
    };
    match criteria.search.scope {
        SearchScope::Title => in_title(),
        SearchScope::Description => in_description(),
        SearchScope::All => in_title() || in_description(),
    }
}

fn matches_priority(task: &Task, criteria: &FilterCriteria) -> bool {
    criteria.priorities.is_empty() || criteria.priorities.contains(&task.priority)
}

/// ALL-of tag semantics: the task must carry every tag in the filter set.
fn matches_tags(task: &Task, criteria: &FilterCriteria) -> bool {
    criteria
        .tags
        .iter()
        .all(|wanted| task.tags.iter().any(|t| t == wanted))
}

fn matches_due(task: &Task, bucket: DateBucket, now: DateTime<Local>) -> bool {
    match bucket {
        DateBucket::All => true,
        DateBucket::NoDeadline => task.due_date.is_none(),
        DateBucket::Recent => task.created_at >= now.timestamp_millis() - DAY_MS,
        DateBucket::Today => task
            .due_date
            .is_some_and(|due| time::same_local_day(due, now)),
        DateBucket::Week => task.due_date.is_some_and(|due| {
            let start = time::start_of_day_ms(now);
            due >= start && due <= start + 7 * DAY_MS
        }),
        DateBucket::Overdue => task.due_date.is_some_and(|due| {
            due < time::start_of_day_ms(now) && task.status != TaskStatus::Done
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
