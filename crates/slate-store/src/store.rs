//! The task store: canonical collection plus atomic mutation operations.
//!
//! All operations are total over the in-memory collection — a mutation
//! targeting an id that no longer exists is a silent no-op, never an error,
//! because callers only ever hold ids obtained from a current snapshot.
//! Each applied mutation notifies subscribers, then re-persists the full
//! state; a failed persist is logged and dropped, leaving the in-memory
//! collection authoritative (the next successful persist writes everything).

use slate_core::{time, Task, TaskDraft, TaskId, TaskPatch, TaskStatus};
use tracing::{debug, warn};

use crate::storage::{load_state, BoardPrefs, PersistedState, StorageBackend};

/// Notification emitted after a mutation is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task was created.
    Added(TaskId),
    /// A task's fields were edited.
    Updated(TaskId),
    /// A task changed column.
    Moved(TaskId),
    /// A task's manual order key changed.
    Reordered(TaskId),
    /// A task's favorite flag flipped.
    FavoriteToggled(TaskId),
    /// A task was removed.
    Deleted(TaskId),
    /// The whole collection was emptied.
    Cleared,
    /// A UI preference flag changed.
    PrefsChanged,
}

type Listener = Box<dyn Fn(&StoreEvent)>;

/// Owner of the canonical task collection.
pub struct TaskStore {
    tasks: Vec<Task>,
    prefs: BoardPrefs,
    storage: Box<dyn StorageBackend>,
    listeners: Vec<Listener>,
}

impl TaskStore {
    /// Rehydrate from `storage`, seeding sample tasks when no usable
    /// record exists.
    pub fn open(storage: impl StorageBackend + 'static) -> Self {
        let state = load_state(&storage);
        Self {
            tasks: state.tasks,
            prefs: state.prefs,
            storage: Box::new(storage),
            listeners: Vec::new(),
        }
    }

    /// Read-only snapshot of the collection, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current UI preference flags.
    #[must_use]
    pub fn prefs(&self) -> &BoardPrefs {
        &self.prefs
    }

    /// Register a listener invoked after every applied mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Task mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Create a task from `draft` and append it to the collection.
    ///
    /// Assigns a fresh id, `created_at = updated_at = now`, and an initial
    /// `order` equal to the creation time.
    #[allow(clippy::cast_precision_loss)] // millisecond timestamps fit in f64 exactly
    pub fn add_task(&mut self, draft: TaskDraft) -> TaskId {
        let now = time::now_ms();
        let task = Task {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at: now,
            updated_at: now,
            due_date: draft.due_date,
            tags: draft.tags,
            assignee: draft.assignee,
            is_favorite: draft.is_favorite,
            order: Some(now as f64),
        };
        let id = task.id.clone();
        debug!(id = %id, "task added");
        self.tasks.push(task);
        self.commit(StoreEvent::Added(id.clone()));
        id
    }

    /// Merge `patch` into the task matching `id` and bump `updated_at`.
    pub fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == *id) else {
            return;
        };
        patch.apply(task);
        task.updated_at = time::now_ms();
        self.commit(StoreEvent::Updated(id.clone()));
    }

    /// Move the task matching `id` to `new_status` and bump `updated_at`.
    ///
    /// The task's `order` key is kept, so it re-sorts in its new column
    /// according to the active sort option.
    pub fn move_task(&mut self, id: &TaskId, new_status: TaskStatus) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == *id) else {
            return;
        };
        task.status = new_status;
        task.updated_at = time::now_ms();
        self.commit(StoreEvent::Moved(id.clone()));
    }

    /// Set the manual `order` key of the task matching `id`.
    ///
    /// A pure positional change: `updated_at` is deliberately not bumped.
    pub fn update_task_order(&mut self, id: &TaskId, new_order: f64) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == *id) else {
            return;
        };
        task.order = Some(new_order);
        self.commit(StoreEvent::Reordered(id.clone()));
    }

    /// Flip the favorite flag of the task matching `id`.
    pub fn toggle_favorite(&mut self, id: &TaskId) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == *id) else {
            return;
        };
        task.is_favorite = !task.is_favorite;
        task.updated_at = time::now_ms();
        self.commit(StoreEvent::FavoriteToggled(id.clone()));
    }

    /// Remove the task matching `id` permanently.
    pub fn delete_task(&mut self, id: &TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != *id);
        if self.tasks.len() == before {
            return;
        }
        debug!(id = %id, "task deleted");
        self.commit(StoreEvent::Deleted(id.clone()));
    }

    /// Empty the collection. Irreversible; the presentation layer confirms
    /// with the user before calling.
    pub fn clear_all_tasks(&mut self) {
        self.tasks.clear();
        self.commit(StoreEvent::Cleared);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Preference mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Mark the onboarding tutorial as seen.
    pub fn complete_tutorial(&mut self) {
        self.prefs.has_seen_tutorial = true;
        self.commit(StoreEvent::PrefsChanged);
    }

    /// Flip the dark-mode flag.
    pub fn toggle_dark_mode(&mut self) {
        self.prefs.is_dark_mode = !self.prefs.is_dark_mode;
        self.commit(StoreEvent::PrefsChanged);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Change propagation
    // ─────────────────────────────────────────────────────────────────────

    /// Notify subscribers, then persist the full state.
    fn commit(&self, event: StoreEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
        self.persist();
    }

    fn persist(&self) {
        let state = PersistedState {
            tasks: self.tasks.clone(),
            prefs: self.prefs,
        };
        let raw = match serde_json::to_string(&state) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to encode board state, skipping persist");
                return;
            }
        };
        if let Err(err) = self.storage.write(&raw) {
            warn!(error = %err, "failed to persist board state");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
