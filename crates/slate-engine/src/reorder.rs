//! Fractional order-key allocation for manual drag placement.
//!
//! Dropping a task at position `i` in a column assigns it a fresh `order`
//! key between its new neighbors' keys, so no sibling needs renumbering.
//! Head/tail insertions step by a fixed spacing unit; in-between
//! insertions take the midpoint. Repeated midpoint insertion at the same
//! spot eventually exhausts f64 precision — an accepted limitation for
//! realistic column sizes; there is no rebalancing pass.

use slate_core::{time, Task};

/// Spacing unit for head/tail insertions. Leaves headroom for many
/// subsequent insertions before neighboring keys become indistinguishable.
pub const ORDER_SPACING: f64 = 10_000.0;

/// Compute the `order` key for a task dropped at `target_index` among
/// `siblings`.
///
/// `siblings` is the destination column as rendered under manual order,
/// excluding the moved task itself. `target_index` is the 0-based drop
/// position; an out-of-bounds index clamps to the tail. No sibling is
/// mutated — the caller stores the returned key on the moved task only.
#[must_use]
pub fn compute_reorder_target(siblings: &[Task], target_index: usize) -> f64 {
    compute_reorder_target_at(siblings, target_index, time::now_ms())
}

/// Fixed-clock variant of [`compute_reorder_target`]; `now_ms` is the key
/// assigned when the column is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)] // millisecond timestamps fit in f64 exactly
pub fn compute_reorder_target_at(siblings: &[Task], target_index: usize, now_ms: i64) -> f64 {
    let index = target_index.min(siblings.len());
    let prev = index.checked_sub(1).map(|i| siblings[i].sort_key());
    let next = siblings.get(index).map(Task::sort_key);

    match (prev, next) {
        (None, None) => now_ms as f64,
        (None, Some(next)) => next - ORDER_SPACING,
        (Some(prev), None) => prev + ORDER_SPACING,
        (Some(prev), Some(next)) => (prev + next) / 2.0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
