//! The `Task` record and its closed enums.
//!
//! Persisted JSON uses camelCase field names and lowercase canonical enum
//! labels (`todo`, `in-progress`, `done`; `low`, `medium`, `high`). Legacy
//! records saved by earlier versions used uppercase labels with underscores
//! (`IN_PROGRESS`, `HIGH`); deserialization is case-insensitive and treats
//! `_` as `-`, so those normalize to the canonical forms on load. A label
//! outside the closed set is a deserialization error — the store's load path
//! treats that as a malformed record and falls back to seed data.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::ids::TaskId;

/// Column a task lives in. Every task has exactly one; there is no
/// "unassigned" state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Todo,
    /// Actively being worked.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// All statuses in column display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Canonical lowercase label used in persisted JSON.
    #[must_use]
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Parse a label, tolerating legacy casing and `_` separators.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

/// Task priority level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Default urgency.
    #[default]
    Medium,
    /// High urgency.
    High,
}

impl Priority {
    /// Canonical lowercase label used in persisted JSON.
    #[must_use]
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a label, tolerating legacy casing and `_` separators.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Numeric rank for comparator use: low(1) < medium(2) < high(3).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// Lowercase a label and fold `_` into `-`.
fn normalize_label(label: &str) -> String {
    label.to_lowercase().replace('_', "-")
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::parse_label(&label)
            .ok_or_else(|| de::Error::unknown_variant(&label, &["todo", "in-progress", "done"]))
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::parse_label(&label)
            .ok_or_else(|| de::Error::unknown_variant(&label, &["low", "medium", "high"]))
    }
}

/// A single board task.
///
/// Timestamps are epoch milliseconds. `order` is the manual positioning key;
/// when absent, `created_at` stands in (see [`Task::sort_key`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation, immutable.
    pub id: TaskId,
    /// Non-empty display title (presentation-layer enforced).
    pub title: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current column.
    pub status: TaskStatus,
    /// Priority level.
    pub priority: Priority,
    /// Creation timestamp (immutable), also the fallback ordering key.
    pub created_at: i64,
    /// Timestamp of the last mutation. Legacy records may omit it; the
    /// store backfills it from `created_at` on load.
    #[serde(default)]
    pub updated_at: i64,
    /// Optional deadline timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    /// Short labels, soft-capped at 3 per task by the UI.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Optional free-text assignee label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Favorite flag, independent of status and priority.
    #[serde(default)]
    pub is_favorite: bool,
    /// Manual intra-column position. Fractional; need not be unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl Task {
    /// The manual/fallback ordering key: `order`, or `created_at` when no
    /// manual position has ever been assigned.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // millisecond timestamps fit in f64 exactly
    pub fn sort_key(&self) -> f64 {
        self.order.unwrap_or(self.created_at as f64)
    }
}

/// Caller-supplied fields for task creation.
///
/// The store assigns `id`, `created_at`, `updated_at`, and the initial
/// `order` itself.
#[derive(Clone, Debug, Default)]
pub struct TaskDraft {
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Starting column (defaults to todo).
    pub status: TaskStatus,
    /// Priority (defaults to medium).
    pub priority: Priority,
    /// Optional deadline timestamp.
    pub due_date: Option<i64>,
    /// Tag labels.
    pub tags: Vec<String>,
    /// Optional assignee label.
    pub assignee: Option<String>,
    /// Whether the task starts favorited.
    pub is_favorite: bool,
}

/// Merge patch for [`Task`]: `Some` fields are applied, `None` fields are
/// left untouched. Clearable fields use a second `Option` level so that
/// `Some(None)` erases the value.
#[derive(Clone, Debug, Default)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New deadline; `Some(None)` clears it.
    pub due_date: Option<Option<i64>>,
    /// Replacement tag set.
    pub tags: Option<Vec<String>>,
    /// New assignee; `Some(None)` clears it.
    pub assignee: Option<Option<String>>,
    /// New favorite flag.
    pub is_favorite: Option<bool>,
}

impl TaskPatch {
    /// Apply every `Some` field to `task`. Does not touch timestamps; the
    /// store owns `updated_at`.
    pub fn apply(&self, task: &mut Task) {
        if let Some(ref title) = self.title {
            task.title = title.clone();
        }
        if let Some(ref desc) = self.description {
            task.description = desc.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due) = self.due_date {
            task.due_date = due;
        }
        if let Some(ref tags) = self.tags {
            task.tags = tags.clone();
        }
        if let Some(ref assignee) = self.assignee {
            task.assignee = assignee.clone();
        }
        if let Some(fav) = self.is_favorite {
            task.is_favorite = fav;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str) -> Task {
        Task {
            id: TaskId::from("t1"),
            title: title.to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            created_at: 1_000,
            updated_at: 1_000,
            due_date: None,
            tags: Vec::new(),
            assignee: None,
            is_favorite: false,
            order: None,
        }
    }

    // ── enum labels ─────────────────────────────────────────────────

    #[test]
    fn status_canonical_labels() {
        assert_eq!(TaskStatus::Todo.as_label(), "todo");
        assert_eq!(TaskStatus::InProgress.as_label(), "in-progress");
        assert_eq!(TaskStatus::Done.as_label(), "done");
    }

    #[test]
    fn status_parses_legacy_casing() {
        assert_eq!(TaskStatus::parse_label("TODO"), Some(TaskStatus::Todo));
        assert_eq!(
            TaskStatus::parse_label("IN_PROGRESS"),
            Some(TaskStatus::InProgress)
        );
        assert_eq!(
            TaskStatus::parse_label("In_Progress"),
            Some(TaskStatus::InProgress)
        );
        assert_eq!(TaskStatus::parse_label("Done"), Some(TaskStatus::Done));
    }

    #[test]
    fn status_rejects_unknown() {
        assert_eq!(TaskStatus::parse_label("archived"), None);
        assert_eq!(TaskStatus::parse_label(""), None);
    }

    #[test]
    fn priority_parses_legacy_casing() {
        assert_eq!(Priority::parse_label("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse_label("Medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse_label("low"), Some(Priority::Low));
        assert_eq!(Priority::parse_label("critical"), None);
    }

    #[test]
    fn priority_rank_ordering() {
        assert!(Priority::Low.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::High.rank());
    }

    // ── serde ───────────────────────────────────────────────────────

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn status_deserializes_legacy_uppercase() {
        let status: TaskStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn status_deserialize_unknown_is_error() {
        let result = serde_json::from_str::<TaskStatus>("\"blocked\"");
        assert!(result.is_err());
    }

    #[test]
    fn task_serde_camel_case() {
        let mut t = task("Buy milk");
        t.due_date = Some(2_000);
        t.is_favorite = true;
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("dueDate").is_some());
        assert!(json.get("isFavorite").is_some());
        assert_eq!(json["status"], "todo");
        assert_eq!(json["priority"], "medium");
    }

    #[test]
    fn task_deserializes_legacy_record() {
        // Shape written by the original store: uppercase enums, no
        // updatedAt/tags/isFavorite.
        let json = serde_json::json!({
            "id": "3",
            "title": "Setup Repo",
            "description": "Initialize project.",
            "status": "IN_PROGRESS",
            "priority": "HIGH",
            "createdAt": 1_700_000_000_000_i64
        });
        let t: Task = serde_json::from_value(json).unwrap();
        assert_eq!(t.status, TaskStatus::InProgress);
        assert_eq!(t.priority, Priority::High);
        assert_eq!(t.updated_at, 0);
        assert!(t.tags.is_empty());
        assert!(!t.is_favorite);
        assert!(t.order.is_none());
    }

    // ── sort key ────────────────────────────────────────────────────

    #[test]
    #[allow(clippy::float_cmp)]
    fn sort_key_prefers_order() {
        let mut t = task("a");
        assert_eq!(t.sort_key(), 1_000.0);
        t.order = Some(42.5);
        assert_eq!(t.sort_key(), 42.5);
    }

    // ── patch ───────────────────────────────────────────────────────

    #[test]
    fn patch_applies_some_fields_only() {
        let mut t = task("old");
        t.due_date = Some(5_000);
        let patch = TaskPatch {
            title: Some("new".to_string()),
            priority: Some(Priority::High),
            ..Default::default()
        };
        patch.apply(&mut t);
        assert_eq!(t.title, "new");
        assert_eq!(t.priority, Priority::High);
        assert_eq!(t.due_date, Some(5_000)); // untouched
        assert_eq!(t.status, TaskStatus::Todo);
    }

    #[test]
    fn patch_clears_two_level_options() {
        let mut t = task("a");
        t.description = Some("desc".to_string());
        t.due_date = Some(5_000);
        let patch = TaskPatch {
            description: Some(None),
            due_date: Some(None),
            ..Default::default()
        };
        patch.apply(&mut t);
        assert!(t.description.is_none());
        assert!(t.due_date.is_none());
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut t = task("same");
        let before = t.clone();
        TaskPatch::default().apply(&mut t);
        assert_eq!(t, before);
    }
}
