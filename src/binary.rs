//! Plain binary min-heap
//!
//! The baseline variant: elements are only reachable through the top of the
//! heap, so there is no external index to maintain and no way to update or
//! remove an element that is not the minimum. When you need those
//! operations, use [`HandleHeap`](crate::handle::HandleHeap) or
//! [`KeyedHeap`](crate::keyed::KeyedHeap).
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `clear`   | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{MinHeap, PriorityQueue};
//!
//! let mut heap = MinHeap::with_capacity(4);
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! assert!(heap.pop().is_err());
//! ```

use crate::sift::{sift_down, sift_up};
use crate::traits::{HeapError, PriorityQueue};

/// A plain binary min-heap over `T`
///
/// Elements are stored directly in a dense array; `pop` always returns the
/// smallest element first.
#[derive(Debug)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> for MinHeap<T> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 1, "queue capacity must be greater than 1");
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        // swap_remove moves the last element into the vacated root.
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            sift_down(&mut self.data, 0, |_, _| {});
        }
        Ok(top)
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord> MinHeap<T> {
    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n), amortized over any backing-storage growth.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let slot = self.data.len() - 1;
        sift_up(&mut self.data, slot, |_, _| {});
    }

    /// Returns the number of elements the queue can hold without growing
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Visits the elements in arbitrary (heap-array) order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns references to all elements in ascending order
    ///
    /// O(n log n); intended for tooling and tests, not the hot path.
    pub fn sorted_snapshot(&self) -> Vec<&T> {
        let mut items: Vec<&T> = self.data.iter().collect();
        items.sort();
        items
    }
}
