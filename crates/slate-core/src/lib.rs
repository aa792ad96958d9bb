//! # slate-core
//!
//! Data model for the slate task board: the [`Task`] record, its
//! status/priority enums, the branded [`TaskId`], and the epoch-millisecond
//! time helpers shared by the filter engine and the store.

#![deny(unsafe_code)]

pub mod ids;
pub mod task;
pub mod time;

pub use ids::TaskId;
pub use task::{Priority, Task, TaskDraft, TaskPatch, TaskStatus};
