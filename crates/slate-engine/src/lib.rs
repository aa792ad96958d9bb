//! # slate-engine
//!
//! The deterministic ordering and filtering pipeline: a pure
//! (tasks, criteria) → filtered-sequence filter, a (filtered, sort-option) →
//! three-column partition, and the fractional-key reorder allocator used by
//! manual drag placement. Everything here is synchronous and side-effect
//! free; the one async piece is the keystroke-coalescing
//! [`debounce::SearchDebouncer`].

#![deny(unsafe_code)]

pub mod criteria;
pub mod debounce;
pub mod filter;
pub mod partition;
pub mod reorder;
pub mod stats;

pub use criteria::{DateBucket, FilterCriteria, SearchCriteria, SearchScope, SortOption};
pub use filter::{filter, filter_at};
pub use partition::{filter_and_partition, partition, Board};
pub use reorder::compute_reorder_target;
pub use stats::BoardStats;
