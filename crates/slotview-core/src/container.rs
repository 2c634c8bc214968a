//! The storage side of a view.
//!
//! Views never own or reference the slots they describe. Every operation that
//! touches items takes the container explicitly, so one view can be reused
//! against any number of containers. The container only has to offer indexed
//! access ([`SlotContainer`]); the merge logic of
//! [`SlotMapping::add`](crate::SlotMapping::add) additionally needs a
//! [`StackingRule`] describing how items combine.

/// Indexed slot storage addressed by external slot ids.
///
/// The container is authoritative for its own bounds: views translate slot
/// ids but never check them against the container. Implementations should
/// fail for out-of-range slots the same way slice indexing does.
pub trait SlotContainer {
    /// The value stored in each slot.
    type Item: Clone;

    /// Returns the item stored at `slot`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `slot` is out of range.
    fn item(&self, slot: usize) -> &Self::Item;

    /// Replaces the item stored at `slot`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `slot` is out of range.
    fn set_item(&mut self, slot: usize, item: Self::Item);
}

impl<T: Clone> SlotContainer for [T] {
    type Item = T;

    #[inline]
    fn item(&self, slot: usize) -> &T {
        &self[slot]
    }

    #[inline]
    fn set_item(&mut self, slot: usize, item: T) {
        self[slot] = item;
    }
}

impl<T: Clone, const N: usize> SlotContainer for [T; N] {
    type Item = T;

    #[inline]
    fn item(&self, slot: usize) -> &T {
        &self[slot]
    }

    #[inline]
    fn set_item(&mut self, slot: usize, item: T) {
        self[slot] = item;
    }
}

impl<T: Clone> SlotContainer for Vec<T> {
    type Item = T;

    #[inline]
    fn item(&self, slot: usize) -> &T {
        &self[slot]
    }

    #[inline]
    fn set_item(&mut self, slot: usize, item: T) {
        self[slot] = item;
    }
}

/// Rules for merging items into stacks.
///
/// An item is treated as a stack of some amount. Two stacks can merge when
/// [`can_be_stacked`](Self::can_be_stacked) allows it, and a stack never grows
/// beyond [`max_size`](Self::max_size). An item with amount zero is the empty
/// item.
pub trait StackingRule {
    /// The item type the rule applies to.
    type Item;

    /// Returns `true` if `item` and `other` can share a stack.
    fn can_be_stacked(&self, item: &Self::Item, other: &Self::Item) -> bool;

    /// Returns the amount held by `item`.
    fn amount(&self, item: &Self::Item) -> u32;

    /// Returns the largest amount a stack of `item` may hold.
    fn max_size(&self, item: &Self::Item) -> u32;

    /// Returns `true` if `item` could hold `amount`.
    fn can_apply(&self, item: &Self::Item, amount: u32) -> bool;

    /// Returns a copy of `item` holding `amount`.
    ///
    /// Applying an amount of zero yields the empty item.
    fn apply(&self, item: &Self::Item, amount: u32) -> Self::Item;

    /// Returns `true` if `item` is the empty item.
    fn is_empty(&self, item: &Self::Item) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_container() {
        let mut slots = vec![0_u8; 4];
        slots.set_item(2, 7);
        assert_eq!(*slots.item(2), 7);
        assert_eq!(slots, [0, 0, 7, 0]);
    }

    #[test]
    fn test_array_and_slice_container() {
        let mut slots = [1_u8, 2, 3];
        slots.set_item(0, 9);
        assert_eq!(*slots.item(0), 9);

        let slice: &mut [u8] = &mut slots;
        slice.set_item(2, 5);
        assert_eq!(*slice.item(2), 5);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_out_of_range_slot_panics() {
        let slots = vec![0_u8; 4];
        let _ = slots.item(4);
    }
}
