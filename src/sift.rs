//! Sift primitives shared by every queue variant
//!
//! Both routines restore the min-heap invariant for a single out-of-place
//! element by swapping it toward its resting slot, and both are generic over
//! an `on_move` hook so the indexed variants can mirror slot changes into
//! their lookup structures as they happen. The plain variant passes a no-op
//! hook.
//!
//! Hook contract: `on_move(element, slot)` fires once for each displaced
//! element at the moment it lands in its new slot, and once for the sifted
//! element at its final slot — even when that element never moved. Keeping
//! the final report unconditional means callers never have to special-case
//! the "already in place" path.
//!
//! Callers guarantee `slot < data.len()`; neither routine is ever invoked on
//! an empty array (removing the sole element of a queue skips sifting
//! entirely).

/// Moves the element at `slot` toward the root while its parent is strictly
/// greater, reporting every relocation through `on_move`.
///
/// Returns the element's final slot.
pub(crate) fn sift_up<T, F>(data: &mut [T], mut slot: usize, mut on_move: F) -> usize
where
    T: Ord,
    F: FnMut(&T, usize),
{
    while slot > 0 {
        let parent = (slot - 1) / 2;
        if data[parent] <= data[slot] {
            break;
        }
        data.swap(slot, parent);
        // The displaced parent now lives at `slot`.
        on_move(&data[slot], slot);
        slot = parent;
    }
    on_move(&data[slot], slot);
    slot
}

/// Moves the element at `slot` toward the leaves while it has a strictly
/// smaller child, reporting every relocation through `on_move`.
///
/// The smaller of the two children is chosen; on ties the left child wins.
/// Returns the element's final slot.
pub(crate) fn sift_down<T, F>(data: &mut [T], mut slot: usize, mut on_move: F) -> usize
where
    T: Ord,
    F: FnMut(&T, usize),
{
    let len = data.len();
    loop {
        let left = 2 * slot + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let child = if right < len && data[right] < data[left] {
            right
        } else {
            left
        };
        if data[slot] <= data[child] {
            break;
        }
        data.swap(slot, child);
        // The displaced child now lives at `slot`.
        on_move(&data[slot], slot);
        slot = child;
    }
    on_move(&data[slot], slot);
    slot
}
