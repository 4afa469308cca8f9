//! Key-indexed binary min-heap
//!
//! Elements of a [`KeyedHeap`] carry their own identity: the [`KeyedItem`]
//! trait exposes a key, and a hash index maps each live key to the exact
//! heap slot currently holding its element. That makes the queue addressable
//! from outside without the caller tracking handles — `set` upserts by key,
//! [`remove`](KeyedHeap::remove) and [`contains`](KeyedHeap::contains) work
//! straight off the key.
//!
//! [`set`](KeyedHeap::set) is the decrease-key surface of this variant: for
//! a key already queued it only ever applies a strictly smaller value, so
//! repeated sets converge monotonically toward the minimum (the useful
//! behavior for shortest-distance style workloads, where a larger candidate
//! for a known key is simply stale).
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `set`      | O(log n); O(1) when the upsert is a no-op |
//! | `pop`      | O(log n)   |
//! | `remove`   | O(log n)   |
//! | `contains` | O(1)       |
//! | `peek`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{KeyedHeap, KeyedItem, PriorityQueue};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! struct Route {
//!     distance: u32,
//!     city: char,
//! }
//!
//! impl KeyedItem for Route {
//!     type Key = char;
//!     fn key(&self) -> char {
//!         self.city
//!     }
//! }
//!
//! let mut heap = KeyedHeap::with_capacity(8);
//! heap.set(Route { distance: 10, city: 'a' });
//! heap.set(Route { distance: 3, city: 'a' }); // decreases
//! heap.set(Route { distance: 99, city: 'a' }); // stale, ignored
//!
//! assert_eq!(heap.peek().map(|r| r.distance), Ok(3));
//! assert!(heap.contains(&'a'));
//! ```

use std::hash::Hash;

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::sift::{sift_down, sift_up};
use crate::traits::{HeapError, PriorityQueue};

/// An element that can live in a [`KeyedHeap`]
///
/// The key is the element's external identity and must stay stable for as
/// long as the element is queued; the `Ord` impl is the queue's ordering
/// and is free to ignore the key.
pub trait KeyedItem: Ord {
    /// External identity of the element
    type Key: Eq + Hash;

    fn key(&self) -> Self::Key;
}

/// A binary min-heap addressed by caller-supplied keys
///
/// See the [module docs](self) for the operation set and complexities.
#[derive(Debug)]
pub struct KeyedHeap<T: KeyedItem> {
    data: Vec<T>,
    index: FxHashMap<T::Key, usize>,
}

impl<T: KeyedItem> PriorityQueue<T> for KeyedHeap<T> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 1, "queue capacity must be greater than 1");
        Self {
            data: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
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
        let top = self.data.swap_remove(0);
        self.index.remove(&top.key());
        if !self.data.is_empty() {
            let Self { data, index } = self;
            sift_down(data, 0, |e: &T, slot| {
                index.insert(e.key(), slot);
            });
        }
        Ok(top)
    }

    fn clear(&mut self) {
        self.data.clear();
        self.index.clear();
    }
}

impl<T: KeyedItem> KeyedHeap<T> {
    /// Inserts `value`, or treats it as a decrease-key for an element
    /// already queued under the same key
    ///
    /// Three cases:
    /// - key absent: the value is inserted;
    /// - key present and `value` strictly smaller than the stored element:
    ///   the stored element is replaced and sifts up;
    /// - key present and `value` not smaller: no-op, the queue is unchanged.
    ///
    /// # Time Complexity
    /// O(log n); O(1) for the no-op case.
    pub fn set(&mut self, value: T) {
        match self.index.get(&value.key()) {
            None => {
                let slot = self.data.len();
                self.data.push(value);
                let Self { data, index } = self;
                // The final hook report writes the new key into the index.
                sift_up(data, slot, |e: &T, slot| {
                    index.insert(e.key(), slot);
                });
            }
            Some(&slot) => {
                if value < self.data[slot] {
                    self.data[slot] = value;
                    let Self { data, index } = self;
                    sift_up(data, slot, |e: &T, slot| {
                        index.insert(e.key(), slot);
                    });
                }
            }
        }
    }

    /// Removes the element queued under `key` and returns it
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownKey`] if no element carries `key`; the
    /// queue is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove(&mut self, key: &T::Key) -> Result<T, HeapError> {
        let slot = match self.index.remove(key) {
            Some(slot) => slot,
            None => return Err(HeapError::UnknownKey),
        };
        let removed = self.data.swap_remove(slot);
        // Nothing to re-order when the removed element was the physical last
        // (that covers the single-element queue too).
        if slot < self.data.len() {
            let Self { data, index } = self;
            let landed = sift_down(data, slot, |e: &T, slot| {
                index.insert(e.key(), slot);
            });
            if landed == slot {
                // The replacement did not descend; it may belong above the
                // vacated slot.
                sift_up(data, slot, |e: &T, slot| {
                    index.insert(e.key(), slot);
                });
            }
        }
        Ok(removed)
    }

    /// Returns true if an element is queued under `key`
    pub fn contains(&self, key: &T::Key) -> bool {
        self.index.contains_key(key)
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
