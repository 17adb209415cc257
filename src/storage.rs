//! Pluggable handle tables for position tracking
//!
//! The queue permutes its entries on every sift, so an external handle cannot
//! simply be an array index. A [`HandleTable`] maps each live handle to the
//! current array index of its entry and is updated on every swap.
//!
//! - [`SlotTable`]: Default, arena-based table using `slotmap` with generational keys
//! - [`SharedPositions`]: Back-pointer table where each entry shares an
//!   `Rc<Cell<Option<usize>>>` position cell with its handle
//!
//! # Design
//!
//! Each backend provides:
//! - A `Handle` type given out to callers
//! - `bind` / `locate` / `rebind` / `free`, all O(1)
//!
//! Freeing a handle makes every copy of it stale: `locate` returns `None`
//! from then on, which the queue reports as `InvalidHandle`.
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::storage::{HandleTable, SlotTable};
//!
//! let mut table = SlotTable::default();
//! let handle = table.bind(0);
//! table.rebind(&handle, 3);
//! assert_eq!(table.locate(&handle), Some(3));
//! assert_eq!(table.free(&handle), Some(3));
//! assert_eq!(table.locate(&handle), None);
//! ```

use crate::traits::Handle;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::{new_key_type, SlotMap};

/// Trait for handle-table backends
///
/// This trait abstracts over how a handle finds its entry's array index,
/// enabling both an arena-based and a back-pointer realization.
pub trait HandleTable: Default {
    /// Handle type issued to callers
    type Handle: Handle;

    /// Create a table with room for `capacity` handles before reallocating
    fn with_capacity(capacity: usize) -> Self;

    /// Issue a fresh handle bound to `index`
    fn bind(&mut self, index: usize) -> Self::Handle;

    /// Current array index of a live handle, or `None` if it was freed
    fn locate(&self, handle: &Self::Handle) -> Option<usize>;

    /// Record that the handle's entry now lives at `index`
    ///
    /// Rebinding a freed handle has no effect.
    fn rebind(&mut self, handle: &Self::Handle, index: usize);

    /// Invalidate a handle, returning the index it was bound to
    fn free(&mut self, handle: &Self::Handle) -> Option<usize>;
}

// ============================================================================
// SlotTable - Default arena implementation
// ============================================================================

new_key_type! {
    struct SlotKey;
}

/// Source of per-table identities, so handles never cross tables
static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(0);

fn next_table_id() -> u64 {
    NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Generational handle issued by [`SlotTable`]
///
/// Carries the identity of the issuing table next to the slot key. A fresh
/// table hands out the same slot keys as any other fresh table, so the key
/// alone cannot tell whose element it names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SlotHandle {
    table: u64,
    key: SlotKey,
}

impl Handle for SlotHandle {}

/// SlotMap-based handle table (default)
///
/// # Characteristics
/// - Contiguous slot storage, one `usize` per live handle
/// - Generational keys detect stale handles after extraction
/// - Handles from another table are never located
/// - Handles are `Copy` and 16 bytes wide
#[derive(Debug)]
pub struct SlotTable {
    id: u64,
    slots: SlotMap<SlotKey, usize>,
}

impl SlotTable {
    #[inline]
    fn key_of(&self, handle: &SlotHandle) -> Option<SlotKey> {
        (handle.table == self.id).then_some(handle.key)
    }
}

impl Default for SlotTable {
    fn default() -> Self {
        Self {
            id: next_table_id(),
            slots: SlotMap::with_key(),
        }
    }
}

impl HandleTable for SlotTable {
    type Handle = SlotHandle;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            id: next_table_id(),
            slots: SlotMap::with_capacity_and_key(capacity),
        }
    }

    fn bind(&mut self, index: usize) -> Self::Handle {
        SlotHandle {
            table: self.id,
            key: self.slots.insert(index),
        }
    }

    #[inline]
    fn locate(&self, handle: &Self::Handle) -> Option<usize> {
        let key = self.key_of(handle)?;
        self.slots.get(key).copied()
    }

    #[inline]
    fn rebind(&mut self, handle: &Self::Handle, index: usize) {
        if let Some(key) = self.key_of(handle) {
            if let Some(slot) = self.slots.get_mut(key) {
                *slot = index;
            }
        }
    }

    fn free(&mut self, handle: &Self::Handle) -> Option<usize> {
        let key = self.key_of(handle)?;
        self.slots.remove(key)
    }
}

// ============================================================================
// SharedPositions - Back-pointer implementation
// ============================================================================

/// Handle issued by [`SharedPositions`]
///
/// Wraps the position cell shared with the entry. Two handles are equal only
/// if they share the same cell.
pub struct PositionHandle(Rc<Cell<Option<usize>>>);

impl fmt::Debug for PositionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PositionHandle")
            .field(&Rc::as_ptr(&self.0))
            .field(&self.0.get())
            .finish()
    }
}

impl Clone for PositionHandle {
    fn clone(&self) -> Self {
        PositionHandle(Rc::clone(&self.0))
    }
}

impl PartialEq for PositionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for PositionHandle {}

impl Handle for PositionHandle {}

/// Rc-based back-pointer table
///
/// Every entry carries its own position cell; the handle is a second strong
/// reference to that cell. The table itself holds no state.
///
/// # Characteristics
/// - No central table, one allocation per element
/// - Freeing writes `None` into the cell, so copies held by the caller go stale
/// - Handles are `!Send`, matching the single-owner queue
#[derive(Debug, Default, Clone)]
pub struct SharedPositions;

impl HandleTable for SharedPositions {
    type Handle = PositionHandle;

    fn with_capacity(_capacity: usize) -> Self {
        SharedPositions
    }

    fn bind(&mut self, index: usize) -> Self::Handle {
        PositionHandle(Rc::new(Cell::new(Some(index))))
    }

    #[inline]
    fn locate(&self, handle: &Self::Handle) -> Option<usize> {
        handle.0.get()
    }

    #[inline]
    fn rebind(&mut self, handle: &Self::Handle, index: usize) {
        if handle.0.get().is_some() {
            handle.0.set(Some(index));
        }
    }

    fn free(&mut self, handle: &Self::Handle) -> Option<usize> {
        handle.0.take()
    }
}
