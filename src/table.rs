//! Handle table: a free-list arena mapping stable ids to heap slots
//!
//! Entries live in a `Vec`; a handle is the index of its entry, so looking a
//! handle up is one bounds-checked array access. Released entries are
//! threaded into an intrusive free list through their `next_free` field, with
//! a plain `free_head` id as the list head and [`NIL`] as the terminator.
//! Allocation pops the head, so ids are recycled most-recently-released
//! first, and the table only grows when the free list is empty.

/// Marks an absent id: end of the free list, or the slot of a dead entry.
pub(crate) const NIL: u32 = u32::MAX;

/// Stable identifier for an element in a
/// [`HandleHeap`](crate::handle::HandleHeap)
///
/// A handle stays valid while its element is queued, across any number of
/// internal relocations. It dies when the element is popped or removed, or
/// when the queue is cleared. Dead ids are recycled by later pushes, so a
/// handle kept around after its element left the queue may compare equal to
/// the handle of a newer, unrelated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u32);

#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Heap slot currently holding the element, or [`NIL`] when the entry is
    /// on the free list.
    slot: u32,
    /// Next id on the free list, [`NIL`] at the end.
    next_free: u32,
}

/// Free-list arena backing [`HandleHeap`](crate::handle::HandleHeap)
#[derive(Debug)]
pub(crate) struct HandleTable {
    entries: Vec<Entry>,
    free_head: u32,
}

impl HandleTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free_head: NIL,
        }
    }

    /// Issues a handle mapped to `slot`, reusing the most recently released
    /// id when one exists.
    pub(crate) fn alloc(&mut self, slot: usize) -> Handle {
        let id = if self.free_head == NIL {
            self.entries.push(Entry {
                slot: slot as u32,
                next_free: NIL,
            });
            (self.entries.len() - 1) as u32
        } else {
            let id = self.free_head;
            let entry = &mut self.entries[id as usize];
            self.free_head = entry.next_free;
            entry.slot = slot as u32;
            entry.next_free = NIL;
            id
        };
        Handle(id)
    }

    /// Returns the handle's current slot, or `None` when the handle is not
    /// live.
    pub(crate) fn get(&self, handle: Handle) -> Option<usize> {
        let entry = self.entries.get(handle.0 as usize)?;
        if entry.slot == NIL {
            return None;
        }
        Some(entry.slot as usize)
    }

    pub(crate) fn set_slot(&mut self, handle: Handle, slot: usize) {
        self.entries[handle.0 as usize].slot = slot as u32;
    }

    /// Kills the handle and pushes its id onto the free list.
    pub(crate) fn release(&mut self, handle: Handle) {
        let entry = &mut self.entries[handle.0 as usize];
        entry.slot = NIL;
        entry.next_free = self.free_head;
        self.free_head = handle.0;
    }

    /// Drops every entry; ids start again from zero.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.free_head = NIL;
    }
}
