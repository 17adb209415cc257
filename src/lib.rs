//! Indexed Binary Heap for Rust
//!
//! This crate provides an addressable minimum-priority queue backed by a binary
//! heap. Besides `insert` and `extract_min`, it can change the priority of an
//! element that is already queued in O(log n), through a stable handle
//! returned at insertion.
//!
//! # Features
//!
//! - **Stable handles**: valid across any number of internal swaps, rejected with
//!   [`HeapError::InvalidHandle`] once their element is extracted
//! - **Two handle-table backends**: generational slots ([`storage::SlotTable`], default)
//!   or shared back-pointers ([`storage::SharedPositions`])
//! - **Fixed or growable capacity**, chosen at construction
//! - **Any unsigned priority type** via [`Priority`], defaulting to `u32`
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::{IndexedBinaryHeap, PriorityQueue};
//!
//! let mut queue: IndexedBinaryHeap<&str> = IndexedBinaryHeap::new();
//! let x = queue.insert(1, "x").unwrap();
//! queue.insert(2, "y").unwrap();
//! queue.insert(3, "z").unwrap();
//!
//! queue.increase_priority(&x, 100).unwrap();
//! assert_eq!(queue.extract_min(), Ok((2, "y")));
//! assert_eq!(queue.extract_min(), Ok((3, "z")));
//! assert_eq!(queue.extract_min(), Ok((100, "x")));
//! ```

pub mod binary;
pub mod priority;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use binary::IndexedBinaryHeap;
pub use priority::Priority;
pub use traits::{Handle, HeapError, PriorityQueue};
