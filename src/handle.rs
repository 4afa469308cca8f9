//! Handle-indexed binary min-heap
//!
//! Every `push` returns a stable [`Handle`] that keeps addressing the same
//! element no matter how far it relocates inside the heap array. Handles make
//! two operations possible that a plain heap cannot offer at O(log n):
//! lowering an element's ordering value ([`lower_key`](HandleHeap::lower_key))
//! and removing an arbitrary element ([`remove`](HandleHeap::remove)).
//!
//! Internally each queued element carries the id of its handle-table entry,
//! and every sift reports slot changes back into the table, so the
//! handle-to-slot mapping is exact after every operation.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `push`      | O(log n)   |
//! | `pop`       | O(log n)   |
//! | `lower_key` | O(log n)   |
//! | `remove`    | O(log n)   |
//! | `peek`      | O(1)       |
//! | `clear`     | O(1)       |
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

use crate::sift::{sift_down, sift_up};
use crate::table::HandleTable;
use crate::traits::{HeapError, PriorityQueue};

pub use crate::table::Handle;

/// Heap element: the caller's value plus the id of its table entry.
///
/// Ordering looks at the value alone; the handle rides along so sifts can
/// tell the table where each element went.
#[derive(Debug)]
struct Slotted<T> {
    value: T,
    handle: Handle,
}

impl<T: Ord> PartialEq for Slotted<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Ord> Eq for Slotted<T> {}

impl<T: Ord> PartialOrd for Slotted<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Slotted<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

/// A binary min-heap whose elements are addressable through stable handles
///
/// See the [module docs](self) for the operation set and complexities.
#[derive(Debug)]
pub struct HandleHeap<T> {
    data: Vec<Slotted<T>>,
    table: HandleTable,
}

impl<T: Ord> PriorityQueue<T> for HandleHeap<T> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 1, "queue capacity must be greater than 1");
        Self {
            data: Vec::with_capacity(capacity),
            table: HandleTable::with_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().map(|e| &e.value).ok_or(HeapError::Empty)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let top = self.data.swap_remove(0);
        self.table.release(top.handle);
        if !self.data.is_empty() {
            let Self { data, table } = self;
            sift_down(data, 0, |e: &Slotted<T>, slot| {
                table.set_slot(e.handle, slot)
            });
        }
        Ok(top.value)
    }

    fn clear(&mut self) {
        self.data.clear();
        self.table.clear();
    }
}

impl<T: Ord> HandleHeap<T> {
    /// Inserts a value and returns a handle addressing it for the rest of
    /// its time in the queue
    ///
    /// The most recently released handle id, if any, is reused.
    ///
    /// # Time Complexity
    /// O(log n), amortized over any backing-storage growth.
    pub fn push(&mut self, value: T) -> Handle {
        let slot = self.data.len();
        let handle = self.table.alloc(slot);
        self.data.push(Slotted { value, handle });
        let Self { data, table } = self;
        sift_up(data, slot, |e: &Slotted<T>, slot| {
            table.set_slot(e.handle, slot)
        });
        handle
    }

    /// Replaces the element addressed by `handle` with a value that compares
    /// no greater, then restores heap order
    ///
    /// The replacement value must be ≤ the stored one. That precondition is
    /// a caller contract, checked only by a debug assertion: violating it in
    /// a release build silently corrupts heap order, and extraction order is
    /// meaningless from then on.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidHandle`] if `handle` is not live; the
    /// queue is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn lower_key(&mut self, handle: Handle, value: T) -> Result<(), HeapError> {
        let slot = self.table.get(handle).ok_or(HeapError::InvalidHandle)?;
        debug_assert!(
            value <= self.data[slot].value,
            "lower_key requires a value no greater than the stored one"
        );
        self.data[slot].value = value;
        let Self { data, table } = self;
        sift_up(data, slot, |e: &Slotted<T>, slot| {
            table.set_slot(e.handle, slot)
        });
        Ok(())
    }

    /// Removes the element addressed by `handle` and returns its value
    ///
    /// The handle dies and its id goes back on the free list.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidHandle`] if `handle` is not live; the
    /// queue is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove(&mut self, handle: Handle) -> Result<T, HeapError> {
        let slot = self.table.get(handle).ok_or(HeapError::InvalidHandle)?;
        self.table.release(handle);
        let removed = self.data.swap_remove(slot);
        // Nothing to re-order when the removed element was the physical last
        // (that covers the single-element queue too).
        if slot < self.data.len() {
            let Self { data, table } = self;
            let landed = sift_down(data, slot, |e: &Slotted<T>, slot| {
                table.set_slot(e.handle, slot)
            });
            if landed == slot {
                // The replacement did not descend; it may belong above the
                // vacated slot.
                sift_up(data, slot, |e: &Slotted<T>, slot| {
                    table.set_slot(e.handle, slot)
                });
            }
        }
        Ok(removed.value)
    }

    /// Returns the number of elements the queue can hold without growing
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Visits the elements in arbitrary (heap-array) order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|e| &e.value)
    }

    /// Returns references to all elements in ascending order
    ///
    /// O(n log n); intended for tooling and tests, not the hot path.
    pub fn sorted_snapshot(&self) -> Vec<&T> {
        let mut items: Vec<&T> = self.data.iter().map(|e| &e.value).collect();
        items.sort();
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that every element's table entry points at its actual slot.
    fn check_table_sync<T: Ord>(heap: &HandleHeap<T>) {
        for (slot, element) in heap.data.iter().enumerate() {
            assert_eq!(
                heap.table.get(element.handle),
                Some(slot),
                "table out of sync at slot {slot}"
            );
        }
    }

    #[test]
    fn test_lower_key_reorders() {
        let mut heap = HandleHeap::with_capacity(8);
        let _h0 = heap.push(10);
        let h1 = heap.push(20);
        let _h2 = heap.push(5);
        check_table_sync(&heap);

        heap.lower_key(h1, 1).unwrap();
        check_table_sync(&heap);

        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.peek(), Ok(&5));
        check_table_sync(&heap);
    }

    #[test]
    fn test_lower_key_to_equal_value_is_allowed() {
        let mut heap = HandleHeap::with_capacity(4);
        let h = heap.push(10);
        heap.lower_key(h, 10).unwrap();
        assert_eq!(heap.peek(), Ok(&10));
    }

    #[test]
    fn test_remove_by_handle() {
        let mut heap = HandleHeap::with_capacity(8);
        let _h0 = heap.push(10);
        let h1 = heap.push(20);
        let _h2 = heap.push(5);
        let _h3 = heap.push(15);

        assert_eq!(heap.remove(h1), Ok(20));
        assert_eq!(heap.len(), 3);
        check_table_sync(&heap);

        assert_eq!(heap.pop(), Ok(5));
        assert_eq!(heap.pop(), Ok(10));
        assert_eq!(heap.pop(), Ok(15));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_remove_sole_element_skips_sifting() {
        let mut heap = HandleHeap::with_capacity(4);
        let h = heap.push(42);
        assert_eq!(heap.remove(h), Ok(42));
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), Err(HeapError::Empty));
    }

    #[test]
    fn test_remove_last_slot_skips_sifting() {
        let mut heap = HandleHeap::with_capacity(8);
        let _h0 = heap.push(1);
        let _h1 = heap.push(2);
        let h2 = heap.push(3);

        // 3 occupies the physically last slot; no replacement moves.
        assert_eq!(heap.remove(h2), Ok(3));
        check_table_sync(&heap);
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
    }

    #[test]
    fn test_remove_interior_replacement_sifts_up() {
        // Removing a deep element whose replacement is smaller than the
        // subtree it lands in exercises the sift-up leg of removal.
        let mut heap = HandleHeap::with_capacity(8);
        let _h0 = heap.push(1);
        let _h1 = heap.push(50);
        let _h2 = heap.push(2);
        let h3 = heap.push(60);
        let _h4 = heap.push(70);
        let _h5 = heap.push(3);

        assert_eq!(heap.remove(h3), Ok(60));
        check_table_sync(&heap);

        let mut drained = Vec::new();
        while let Ok(v) = heap.pop() {
            drained.push(v);
        }
        assert_eq!(drained, vec![1, 2, 3, 50, 70]);
    }

    #[test]
    fn test_stale_handle_after_pop() {
        let mut heap = HandleHeap::with_capacity(4);
        let h = heap.push(1);
        assert_eq!(heap.pop(), Ok(1));

        assert_eq!(heap.lower_key(h, 0), Err(HeapError::InvalidHandle));
        assert_eq!(heap.remove(h), Err(HeapError::InvalidHandle));
    }

    #[test]
    fn test_stale_handle_after_clear() {
        let mut heap = HandleHeap::with_capacity(4);
        let h = heap.push(1);
        heap.clear();
        assert_eq!(heap.remove(h), Err(HeapError::InvalidHandle));
    }

    #[test]
    fn test_handle_ids_recycle_lifo() {
        let mut heap = HandleHeap::with_capacity(8);
        let _a = heap.push(1);
        let b = heap.push(2);
        let c = heap.push(3);

        heap.remove(b).unwrap();
        heap.remove(c).unwrap();

        // c's id was released last, so it is issued first.
        let d = heap.push(4);
        let e = heap.push(5);
        assert_eq!(d, c);
        assert_eq!(e, b);
        check_table_sync(&heap);
    }

    #[test]
    fn test_failed_remove_leaves_queue_untouched() {
        let mut heap = HandleHeap::with_capacity(4);
        let h = heap.push(20);
        let _ = heap.push(10);

        assert_eq!(heap.remove(h), Ok(20));
        // No push in between, so h's id is still on the free list.
        assert_eq!(heap.remove(h), Err(HeapError::InvalidHandle));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.peek(), Ok(&10));
    }

    #[test]
    fn test_pop_releases_handle_for_reuse() {
        let mut heap = HandleHeap::with_capacity(4);
        let a = heap.push(5);
        assert_eq!(heap.pop(), Ok(5));
        let b = heap.push(6);
        assert_eq!(b, a);
    }
}
