//! # slate-store
//!
//! The single source of truth for the board: an owned, ordered task
//! collection behind an atomic mutation API. Every mutation notifies
//! subscribers and re-persists the full state as one JSON record; startup
//! rehydrates from that record, normalizing legacy field casings and
//! seeding sample tasks when nothing usable is stored.

#![deny(unsafe_code)]

pub mod errors;
pub mod seed;
pub mod storage;
pub mod store;

pub use errors::{Result, StoreError};
pub use storage::{BoardPrefs, FileStorage, MemoryStorage, PersistedState, StorageBackend};
pub use store::{StoreEvent, TaskStore};
