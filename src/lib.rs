//! Indexed binary-heap priority queues
//!
//! This crate provides three binary min-heaps built on one sift core, differing
//! in how queued elements can be addressed from outside:
//!
//! - [`MinHeap`]: plain min-heap; elements are only reachable through the top
//! - [`HandleHeap`]: every `push` returns a stable [`Handle`] for O(log n)
//!   `lower_key` and removal of arbitrary elements
//! - [`KeyedHeap`]: elements carry their own key ([`KeyedItem`]); `set`
//!   upserts by key, removal and membership tests work straight off the key
//!
//! The indexed variants keep an auxiliary lookup structure (a free-list
//! handle table, a hash index) in exact sync with the heap array as elements
//! relocate during sifting, which is what keeps every update operation at
//! O(log n) instead of the O(n) scan a plain heap would need.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{HandleHeap, PriorityQueue};
//!
//! let mut heap = HandleHeap::with_capacity(8);
//! let _a = heap.push(10);
//! let b = heap.push(20);
//! let _c = heap.push(5);
//!
//! heap.lower_key(b, 1).unwrap();
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.peek(), Ok(&5));
//! ```

pub mod binary;
pub mod handle;
pub mod keyed;
mod sift;
mod table;
pub mod traits;

pub use binary::MinHeap;
pub use handle::{Handle, HandleHeap};
pub use keyed::{KeyedHeap, KeyedItem};
pub use traits::{HeapError, PriorityQueue};
