//! Common traits for the indexed priority queue
//!
//! This module provides the abstract queue interface and its error type:
//!
//! - [`HeapError`]: The single failure discipline shared by every operation
//! - [`Handle`]: Marker trait for the opaque handles returned by `insert`
//! - [`PriorityQueue`]: The addressable min-priority-queue interface
//!
//! The interface separates the ordering key (an unsigned [`Priority`]) from the
//! stored value, so values never need to be comparable.

use crate::priority::Priority;
use std::fmt;

/// Error type for queue operations
///
/// A failing operation always leaves the queue exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek_min` or `extract_min` on an empty queue
    Empty,
    /// `insert` into a fixed-capacity queue that is at capacity
    Full,
    /// The handle is no longer valid (element was extracted or the queue cleared)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "priority queue is empty"),
            HeapError::Full => write!(f, "priority queue is at its fixed capacity"),
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the queue, used for priority updates
///
/// This is an opaque type that identifies a specific element. It stays valid
/// across any number of internal swaps and becomes invalid once the element
/// is extracted or the queue is cleared or dropped.
///
/// Handles are only meaningful for the queue that issued them.
pub trait Handle: Clone + PartialEq + Eq + fmt::Debug {}

/// Addressable minimum-priority queue
///
/// Elements are `(priority, item)` pairs; the element with the smallest
/// priority is served first. `insert` returns a [`Handle`] through which the
/// element's priority can later be lowered or raised in O(log n).
///
/// # Example
///
/// ```rust
/// use indexed_binary_heap::{IndexedBinaryHeap, PriorityQueue};
///
/// let mut queue: IndexedBinaryHeap<&str> = IndexedBinaryHeap::new();
/// queue.insert(5, "x").unwrap();
/// let y = queue.insert(10, "y").unwrap();
///
/// queue.decrease_priority(&y, 1).unwrap();
/// assert_eq!(queue.peek_min(), Ok(&"y"));
/// assert_eq!(queue.extract_min(), Ok((1, "y")));
/// assert_eq!(queue.extract_min(), Ok((5, "x")));
/// ```
pub trait PriorityQueue<T, P: Priority> {
    /// The handle type issued by `insert`
    type Handle: Handle;

    /// Creates a new empty queue that grows on demand
    fn new() -> Self;

    /// Creates a new empty queue that holds at most `capacity` elements
    fn with_fixed_capacity(capacity: usize) -> Self;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns true if a fixed-capacity queue is at capacity
    ///
    /// A growable queue is never full.
    fn is_full(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns the item with the minimum priority without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Inserts an item with the given priority, returning its handle
    ///
    /// # Errors
    /// Returns [`HeapError::Full`] if a fixed-capacity queue is at capacity.
    ///
    /// # Time Complexity
    /// O(log n), amortized for growable queues
    fn insert(&mut self, priority: P, item: T) -> Result<Self::Handle, HeapError>;

    /// Removes and returns the minimum priority and its item
    ///
    /// The handle of the removed element becomes invalid.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Result<(P, T), HeapError>;

    /// Lowers the priority of the element identified by `handle`
    ///
    /// A `new_priority` that is not strictly smaller than the current one
    /// leaves the queue unchanged.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidHandle`] if the handle is stale.
    ///
    /// # Time Complexity
    /// O(log n)
    fn decrease_priority(&mut self, handle: &Self::Handle, new_priority: P)
        -> Result<(), HeapError>;

    /// Raises the priority of the element identified by `handle`
    ///
    /// A `new_priority` that is not strictly greater than the current one
    /// leaves the queue unchanged.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidHandle`] if the handle is stale.
    ///
    /// # Time Complexity
    /// O(log n)
    fn increase_priority(&mut self, handle: &Self::Handle, new_priority: P)
        -> Result<(), HeapError>;
}
