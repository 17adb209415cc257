//! Indexed Binary Heap implementation
//!
//! A binary min-heap stored as an implicit complete tree in a `Vec`, paired
//! with a [`HandleTable`] that tracks where every element currently sits.
//! Because each swap rebinds both affected handles, a handle returned by
//! `insert` can locate its element in O(1) no matter how often it has moved,
//! which is what makes in-place priority updates possible.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `insert`            | O(log n)   |
//! | `extract_min`       | O(log n)   |
//! | `peek_min`          | O(1)       |
//! | `decrease_priority` | O(log n)   |
//! | `increase_priority` | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::{HeapError, IndexedBinaryHeap, PriorityQueue};
//!
//! let mut queue: IndexedBinaryHeap<&str> = IndexedBinaryHeap::with_fixed_capacity(2);
//! let x = queue.insert(1, "x").unwrap();
//! queue.insert(2, "y").unwrap();
//! assert_eq!(queue.insert(3, "z"), Err(HeapError::Full));
//!
//! queue.increase_priority(&x, 100).unwrap();
//! assert_eq!(queue.extract_min(), Ok((2, "y")));
//! assert_eq!(queue.extract_min(), Ok((100, "x")));
//! assert_eq!(queue.priority_of(&x), Err(HeapError::InvalidHandle));
//! ```

use crate::priority::Priority;
use crate::storage::{HandleTable, SlotTable};
use crate::traits::{HeapError, PriorityQueue};
use std::cmp::Ordering;
use std::fmt;

struct Entry<T, P, H> {
    priority: P,
    item: T,
    /// Copy of the caller's handle, needed to rebind on every swap
    handle: H,
}

#[inline]
fn parent_of(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child_of(index: usize) -> usize {
    2 * index + 1
}

/// Indexed binary min-heap
///
/// # Type Parameters
///
/// - `T`: The item type. Items are never compared.
/// - `P`: The priority type, an unsigned integer (default `u32`)
/// - `S`: The [`HandleTable`] backend (default [`SlotTable`])
///
/// Dropping or clearing the queue invalidates every outstanding handle.
pub struct IndexedBinaryHeap<T, P: Priority = u32, S: HandleTable = SlotTable> {
    entries: Vec<Entry<T, P, S::Handle>>,
    handles: S,
    /// `Some(n)` for a fixed-capacity queue, `None` when growable
    limit: Option<usize>,
}

impl<T, P: Priority, S: HandleTable> PriorityQueue<T, P> for IndexedBinaryHeap<T, P, S> {
    type Handle = S::Handle;

    fn new() -> Self {
        Self {
            entries: Vec::new(),
            handles: S::default(),
            limit: None,
        }
    }

    fn with_fixed_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            handles: S::with_capacity(capacity),
            limit: Some(capacity),
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.entries.len() >= limit)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        self.entries
            .first()
            .map(|entry| &entry.item)
            .ok_or(HeapError::Empty)
    }

    fn insert(&mut self, priority: P, item: T) -> Result<Self::Handle, HeapError> {
        if self.is_full() {
            return Err(HeapError::Full);
        }

        let index = self.entries.len();
        let handle = self.handles.bind(index);
        debug_assert_eq!(self.handles.locate(&handle), Some(index));
        self.entries.push(Entry {
            priority,
            item,
            handle: handle.clone(),
        });
        self.sift_up(index);

        Ok(handle)
    }

    fn extract_min(&mut self) -> Result<(P, T), HeapError> {
        let last = match self.entries.len() {
            0 => return Err(HeapError::Empty),
            len => len - 1,
        };

        self.swap_entries(0, last);
        let Some(Entry {
            priority,
            item,
            handle,
        }) = self.entries.pop()
        else {
            unreachable!("extract_min on a non-empty queue");
        };
        let freed = self.handles.free(&handle);
        debug_assert_eq!(freed, Some(last));

        if self.entries.len() > 1 {
            self.sift_down(0);
        }

        Ok((priority, item))
    }

    fn decrease_priority(
        &mut self,
        handle: &Self::Handle,
        new_priority: P,
    ) -> Result<(), HeapError> {
        let index = self.resolve(handle)?;
        if new_priority < self.entries[index].priority {
            self.entries[index].priority = new_priority;
            self.sift_up(index);
        }
        Ok(())
    }

    fn increase_priority(
        &mut self,
        handle: &Self::Handle,
        new_priority: P,
    ) -> Result<(), HeapError> {
        let index = self.resolve(handle)?;
        if new_priority > self.entries[index].priority {
            self.entries[index].priority = new_priority;
            self.sift_down(index);
        }
        Ok(())
    }
}

impl<T, P: Priority, S: HandleTable> IndexedBinaryHeap<T, P, S> {
    /// Returns the minimum priority and its item without removing them
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.entries
            .first()
            .map(|entry| (&entry.priority, &entry.item))
    }

    /// Returns the fixed capacity, or `None` for a growable queue
    pub fn capacity(&self) -> Option<usize> {
        self.limit
    }

    /// Returns true if `handle` refers to an element still in this queue
    pub fn contains(&self, handle: &S::Handle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Returns the current priority of the element behind `handle`
    pub fn priority_of(&self, handle: &S::Handle) -> Result<P, HeapError> {
        self.resolve(handle)
            .map(|index| self.entries[index].priority)
    }

    /// Returns a reference to the item behind `handle`
    pub fn get(&self, handle: &S::Handle) -> Result<&T, HeapError> {
        let index = self.resolve(handle)?;
        Ok(&self.entries[index].item)
    }

    /// Returns a mutable reference to the item behind `handle`
    ///
    /// Items take no part in ordering, so mutating one cannot break the heap.
    pub fn get_mut(&mut self, handle: &S::Handle) -> Result<&mut T, HeapError> {
        let index = self.resolve(handle)?;
        Ok(&mut self.entries[index].item)
    }

    /// Moves the element behind `handle` to `new_priority` in either direction
    ///
    /// Equivalent to `decrease_priority` or `increase_priority`, whichever
    /// applies; an equal priority is a no-op.
    pub fn change_priority(
        &mut self,
        handle: &S::Handle,
        new_priority: P,
    ) -> Result<(), HeapError> {
        let index = self.resolve(handle)?;
        match new_priority.cmp(&self.entries[index].priority) {
            Ordering::Less => {
                self.entries[index].priority = new_priority;
                self.sift_up(index);
            }
            Ordering::Greater => {
                self.entries[index].priority = new_priority;
                self.sift_down(index);
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    /// Removes every element and invalidates every outstanding handle
    ///
    /// The capacity policy is kept.
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.handles.free(&entry.handle);
        }
    }

    /// Verifies heap order, capacity and handle/position consistency
    pub fn check_integrity(&self) -> bool {
        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                return false;
            }
        }

        self.entries.iter().enumerate().all(|(index, entry)| {
            let ordered =
                index == 0 || entry.priority >= self.entries[parent_of(index)].priority;
            ordered && self.handles.locate(&entry.handle) == Some(index)
        })
    }

    /// Find the array index of a live handle issued by this queue
    fn resolve(&self, handle: &S::Handle) -> Result<usize, HeapError> {
        match self.handles.locate(handle) {
            Some(index)
                if index < self.entries.len() && self.entries[index].handle == *handle =>
            {
                Ok(index)
            }
            _ => Err(HeapError::InvalidHandle),
        }
    }

    /// Swap two entries and rebind both of their handles
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.handles.rebind(&self.entries[a].handle, a);
        self.handles.rebind(&self.entries[b].handle, b);
        debug_assert_eq!(self.handles.locate(&self.entries[a].handle), Some(a));
        debug_assert_eq!(self.handles.locate(&self.entries[b].handle), Some(b));
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        debug_assert!(index < self.entries.len());
        while index > 0 {
            let parent = parent_of(index);
            if self.entries[index].priority < self.entries[parent].priority {
                self.swap_entries(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        debug_assert!(index < len);
        loop {
            let left = left_child_of(index);
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap_entries(index, smallest);
            index = smallest;
        }
    }
}

impl<T, P: Priority, S: HandleTable> Drop for IndexedBinaryHeap<T, P, S> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, P: Priority, S: HandleTable> Default for IndexedBinaryHeap<T, P, S> {
    fn default() -> Self {
        <Self as PriorityQueue<T, P>>::new()
    }
}

impl<T: fmt::Debug, P: Priority, S: HandleTable> fmt::Debug for IndexedBinaryHeap<T, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedBinaryHeap")
            .field("capacity", &self.limit)
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|entry| (&entry.priority, &entry.item))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
