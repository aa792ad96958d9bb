//! Filter criteria and sort options.
//!
//! A [`FilterCriteria`] is a set of orthogonal predicates combined with
//! logical AND; [`FilterCriteria::default`] matches every task. The serde
//! labels are the kebab-case strings the sidebar persists (`priority-asc`,
//! `no-deadline`, …).

use serde::{Deserialize, Serialize};
use slate_core::Priority;

/// Which task fields a text search matches against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchScope {
    /// Match the title only.
    Title,
    /// Match the description only.
    Description,
    /// Match if either title or description contains the query.
    #[default]
    All,
}

/// Free-text search criterion. An empty query matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Case-insensitive substring to look for.
    pub query: String,
    /// Fields to search.
    pub scope: SearchScope,
}

/// Deadline-relative filter bucket.
///
/// `Today`, `Week`, and `Overdue` require a due date to exist; tasks
/// without one fail those predicates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateBucket {
    /// No deadline constraint.
    #[default]
    All,
    /// Due on the current local calendar day.
    Today,
    /// Due within `[start of today, start of today + 7 days]`, inclusive.
    Week,
    /// Due before the start of today and not yet done.
    Overdue,
    /// Has no due date at all.
    NoDeadline,
    /// Created within the last 24 hours (ignores due date).
    Recent,
}

/// The complete set of ANDed filter predicates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Free-text search.
    pub search: SearchCriteria,
    /// Priority allow-list; empty means no priority filter.
    pub priorities: Vec<Priority>,
    /// Required tags; a task must carry ALL of them. Empty means no filter.
    pub tags: Vec<String>,
    /// When true, only favorited tasks pass.
    pub favorites_only: bool,
    /// When true, tasks in the done column are excluded.
    pub hide_done: bool,
    /// Deadline bucket.
    pub due: DateBucket,
}

/// User-selected primary ordering rule applied within each column.
///
/// `#[serde(other)]` routes any unrecognized persisted label to `Manual`,
/// so a stale preference string degrades to the fallback comparator rather
/// than failing the load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Low priority first.
    PriorityAsc,
    /// High priority first.
    PriorityDesc,
    /// Newest created first.
    CreatedDesc,
    /// Earliest deadline first; tasks with a deadline before tasks without.
    DueAsc,
    /// Manual order key (`order`, falling back to `created_at`), ascending.
    /// Last so `#[serde(other)]` can catch unrecognized labels.
    #[default]
    #[serde(other)]
    Manual,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
