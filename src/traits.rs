//! Common contracts for the queue family
//!
//! This module provides the two things every queue variant shares:
//!
//! - [`HeapError`]: the error type returned by fallible queue operations
//! - [`PriorityQueue`]: the base interface implemented by all three queues
//!
//! The base [`PriorityQueue`] trait covers construction, inspection, and the
//! extract path. Operations tied to a particular addressing scheme — handle
//! allocation and [`lower_key`](crate::handle::HandleHeap::lower_key) on the
//! handle variant, [`set`](crate::keyed::KeyedHeap::set) and keyed removal on
//! the keyed variant — live on the concrete types.

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The queue has no elements
    #[error("queue is empty")]
    Empty,
    /// The handle is no longer valid (element was removed)
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
    /// No queued element carries the given key
    #[error("no queued element carries the given key")]
    UnknownKey,
}

/// Base trait for the binary min-heap queues
///
/// All three variants ([`MinHeap`](crate::binary::MinHeap),
/// [`HandleHeap`](crate::handle::HandleHeap),
/// [`KeyedHeap`](crate::keyed::KeyedHeap)) implement this trait, so code that
/// only needs the extract side of a queue can stay generic over the
/// addressing scheme.
///
/// Insertion is deliberately not part of the trait: the plain variant's
/// `push` returns nothing, the handle variant's returns a
/// [`Handle`](crate::handle::Handle), and the keyed variant upserts through
/// `set`.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{MinHeap, PriorityQueue};
///
/// let mut heap = MinHeap::with_capacity(8);
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates an empty queue with room for `capacity` elements before the
    /// backing storage has to grow
    ///
    /// Growth preserves all handle and key lookups, so the capacity is purely
    /// a performance hint.
    ///
    /// # Panics
    /// Panics if `capacity` is not greater than 1.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue has no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Removes every element while keeping the allocated capacity
    ///
    /// On the indexed variants this also invalidates every outstanding
    /// handle and forgets every key.
    ///
    /// # Time Complexity
    /// O(1) plus element drops
    fn clear(&mut self);
}
