//! The view contract.

use crate::container::{SlotContainer, StackingRule};

/// A bidirectional mapping between local slot ids and external slot ids.
///
/// Local ids are always the contiguous range `0..size()`. External ids are
/// whatever the next layer down understands: the slots of a container, or the
/// local ids of a parent view.
///
/// Looking up an id the mapping does not cover is routine and is not an
/// error; the conversions return `None` and the validity queries return
/// `false`. For every local id `l` in range,
/// `external_to_local(local_to_external(l)) == Some(l)` holds unless another
/// local id claims the same external id first.
///
/// Besides the five required queries the trait provides container helpers
/// that only rely on those queries and the container passed at call time.
///
/// # Exclusive access
///
/// [`add`](Self::add) reads and writes several slots as one logical step. It
/// takes the container by `&mut`, which is exactly the exclusive access it
/// needs; callers that share a container across threads must hold their lock
/// for the whole call.
pub trait SlotMapping {
    /// Returns the number of local slots.
    fn size(&self) -> usize;

    /// Converts a local slot id into an external slot id.
    ///
    /// Returns `None` if `local` is not in `0..size()`.
    fn local_to_external(&self, local: usize) -> Option<usize>;

    /// Converts an external slot id into the local slot id mapping to it.
    ///
    /// Returns `None` if no local slot maps to `external`.
    fn external_to_local(&self, external: usize) -> Option<usize>;

    /// Returns `true` if `local` is a local slot of this mapping.
    #[inline]
    fn is_valid_local(&self, local: usize) -> bool {
        local < self.size()
    }

    /// Returns `true` if some local slot maps to `external`.
    #[inline]
    fn is_valid_external(&self, external: usize) -> bool {
        self.external_to_local(external).is_some()
    }

    /// Returns the item at `local` in `container`.
    ///
    /// Returns `None` if `local` is not a local slot of this mapping.
    ///
    /// # Panics
    ///
    /// Panics if the container rejects the mapped external slot.
    fn get<'c, C>(&self, container: &'c C, local: usize) -> Option<&'c C::Item>
    where
        C: SlotContainer + ?Sized,
    {
        self.local_to_external(local).map(|slot| container.item(slot))
    }

    /// Stores `item` at `local` in `container`.
    ///
    /// # Errors
    ///
    /// Hands `item` back if `local` is not a local slot of this mapping.
    ///
    /// # Panics
    ///
    /// Panics if the container rejects the mapped external slot.
    fn set<C>(&self, container: &mut C, local: usize, item: C::Item) -> Result<(), C::Item>
    where
        C: SlotContainer + ?Sized,
    {
        match self.local_to_external(local) {
            Some(slot) => {
                container.set_item(slot, item);
                Ok(())
            }
            None => Err(item),
        }
    }

    /// Adds `item` to the slots of this mapping and returns what did not fit.
    ///
    /// The first pass merges `item` into every non-empty, non-full stack it
    /// can be stacked with, in local order. Whatever is left is then placed
    /// in the first empty slot. The returned item is empty when everything
    /// was placed.
    ///
    /// # Panics
    ///
    /// Panics if the container rejects a mapped external slot.
    fn add<C, R>(&self, container: &mut C, rule: &R, item: C::Item) -> C::Item
    where
        C: SlotContainer + ?Sized,
        R: StackingRule<Item = C::Item> + ?Sized,
    {
        if rule.is_empty(&item) {
            return item;
        }
        let mut item = item;

        for local in 0..self.size() {
            let Some(slot) = self.local_to_external(local) else {
                continue;
            };
            let existing = container.item(slot);
            if rule.is_empty(existing) || !rule.can_be_stacked(&item, existing) {
                continue;
            }
            let existing_amount = rule.amount(existing);
            let max = rule.max_size(existing);
            if existing_amount >= max {
                continue;
            }

            let amount = rule.amount(&item);
            let total = amount.checked_add(existing_amount);
            if let Some(total) = total.filter(|&total| rule.can_apply(&item, total)) {
                let merged = rule.apply(existing, total);
                container.set_item(slot, merged);
                log::trace!("merged stack into slot {slot}, now {total}");
                return rule.apply(&item, 0);
            }
            // cannot hold the total and does not overflow: nothing to move
            let Some(rest) = amount.checked_sub(max - existing_amount) else {
                continue;
            };
            let filled = rule.apply(existing, max);
            container.set_item(slot, filled);
            item = rule.apply(&item, rest);
        }

        for local in 0..self.size() {
            let Some(slot) = self.local_to_external(local) else {
                continue;
            };
            if rule.is_empty(container.item(slot)) {
                let empty = rule.apply(&item, 0);
                container.set_item(slot, item);
                log::trace!("placed remaining stack into empty slot {slot}");
                return empty;
            }
        }

        log::trace!("no room left for stack");
        item
    }

    /// Writes `filler(local)` to every local slot, in increasing local order.
    ///
    /// # Panics
    ///
    /// Panics if the container rejects a mapped external slot.
    fn fill<C, F>(&self, container: &mut C, mut filler: F)
    where
        C: SlotContainer + ?Sized,
        F: FnMut(usize) -> C::Item,
    {
        for local in 0..self.size() {
            if let Some(slot) = self.local_to_external(local) {
                container.set_item(slot, filler(local));
            }
        }
    }

    /// Resets every local slot to the empty item, `C::Item::default()`.
    ///
    /// # Panics
    ///
    /// Panics if the container rejects a mapped external slot.
    fn clear<C>(&self, container: &mut C)
    where
        C: SlotContainer + ?Sized,
        C::Item: Default,
    {
        self.fill(container, |_| C::Item::default());
    }

    /// Copies the items of every local slot, in local order.
    ///
    /// The result has exactly [`size()`](Self::size) elements.
    ///
    /// # Panics
    ///
    /// Panics if the container rejects a mapped external slot.
    fn collect<C>(&self, container: &C) -> Vec<C::Item>
    where
        C: SlotContainer + ?Sized,
    {
        (0..self.size())
            .filter_map(|local| self.get(container, local))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        View,
        testing::{Stack, StackRule},
    };

    const RULE: StackRule = StackRule::new(64);

    fn section() -> View {
        // slots 2, 3 and 6 of an 8-slot container, in that order
        View::union([View::contiguous(2, 4).unwrap(), View::arbitrary([6])])
    }

    #[test]
    fn test_get_set() {
        let view = section();
        let mut slots = vec![0_u8; 8];

        assert_eq!(view.set(&mut slots, 2, 9), Ok(()));
        assert_eq!(slots[6], 9);
        assert_eq!(view.get(&slots, 2), Some(&9));

        assert_eq!(view.set(&mut slots, 3, 1), Err(1));
        assert_eq!(view.get(&slots, 3), None);
        assert_eq!(slots, [0, 0, 0, 0, 0, 0, 9, 0]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_container_rejects_out_of_range_slot() {
        let view = View::contiguous(5, 10).unwrap();
        let slots = vec![0_u8; 8];
        let _ = view.get(&slots, 4);
    }

    #[test]
    fn test_fill_visits_each_slot_once_in_order() {
        let view = section();
        let mut slots = vec![0_usize; 8];
        let mut visited = Vec::new();
        view.fill(&mut slots, |local| {
            visited.push(local);
            local + 1
        });
        assert_eq!(visited, [0, 1, 2]);
        assert_eq!(slots, [0, 0, 1, 2, 0, 0, 3, 0]);
    }

    #[test]
    fn test_clear_and_collect() {
        let view = section();
        let mut slots = vec![7_u8; 8];
        assert_eq!(view.collect(&slots), [7, 7, 7]);

        view.clear(&mut slots);
        assert_eq!(view.collect(&slots), [0, 0, 0]);
        assert_eq!(slots, [7, 7, 0, 0, 7, 7, 0, 7]);

        assert!(View::arbitrary([]).collect(&slots).is_empty());
    }

    #[test]
    fn test_add_merges_into_existing_stack() {
        let view = section();
        let mut slots = [Stack::EMPTY; 8];
        slots[3] = Stack::new(1, 10);

        let rest = view.add(&mut slots, &RULE, Stack::new(1, 5));
        assert!(rest.is_empty());
        assert_eq!(slots[3], Stack::new(1, 15));
        assert_eq!(slots[2], Stack::EMPTY);
    }

    #[test]
    fn test_add_spreads_over_partial_stacks_then_empty_slot() {
        let view = section();
        let mut slots = [Stack::EMPTY; 8];
        slots[2] = Stack::new(1, 60);
        slots[3] = Stack::new(1, 62);

        let rest = view.add(&mut slots, &RULE, Stack::new(1, 10));
        assert!(rest.is_empty());
        assert_eq!(slots[2], Stack::new(1, 64));
        assert_eq!(slots[3], Stack::new(1, 64));
        assert_eq!(slots[6], Stack::new(1, 4));
    }

    #[test]
    fn test_add_skips_full_and_foreign_stacks() {
        let view = section();
        let mut slots = [Stack::EMPTY; 8];
        slots[2] = Stack::new(1, 64);
        slots[3] = Stack::new(2, 1);
        // outside the view: must stay untouched
        slots[0] = Stack::new(1, 1);

        let rest = view.add(&mut slots, &RULE, Stack::new(1, 3));
        assert!(rest.is_empty());
        assert_eq!(slots[6], Stack::new(1, 3));
        assert_eq!(slots[0], Stack::new(1, 1));
        assert_eq!(slots[2], Stack::new(1, 64));
        assert_eq!(slots[3], Stack::new(2, 1));
    }

    #[test]
    fn test_add_returns_remainder_when_full() {
        let view = section();
        let mut slots = [Stack::new(1, 63); 8];
        slots[6] = Stack::new(2, 1);

        let rest = view.add(&mut slots, &RULE, Stack::new(1, 5));
        assert_eq!(rest, Stack::new(1, 3));
        assert_eq!(slots[2], Stack::new(1, 64));
        assert_eq!(slots[3], Stack::new(1, 64));
        assert_eq!(slots[6], Stack::new(2, 1));
    }

    #[test]
    fn test_add_huge_stack_onto_partial_stack() {
        let view = View::contiguous(0, 2).unwrap();
        let mut slots = [Stack::new(1, 10), Stack::EMPTY];

        let rest = view.add(&mut slots, &RULE, Stack::new(1, u32::MAX));
        assert!(rest.is_empty());
        assert_eq!(slots, [Stack::new(1, 64), Stack::new(1, u32::MAX - 54)]);
    }

    #[test]
    fn test_add_skips_stack_the_rule_refuses_to_grow() {
        // merges only up to 32 although stacks may hold 64
        struct Strict;

        impl StackingRule for Strict {
            type Item = Stack;

            fn can_be_stacked(&self, item: &Stack, other: &Stack) -> bool {
                RULE.can_be_stacked(item, other)
            }

            fn amount(&self, item: &Stack) -> u32 {
                item.amount()
            }

            fn max_size(&self, _item: &Stack) -> u32 {
                64
            }

            fn can_apply(&self, _item: &Stack, amount: u32) -> bool {
                amount <= 32
            }

            fn apply(&self, item: &Stack, amount: u32) -> Stack {
                Stack::new(item.kind(), amount)
            }

            fn is_empty(&self, item: &Stack) -> bool {
                item.is_empty()
            }
        }

        let view = View::contiguous(0, 3).unwrap();
        let mut slots = [Stack::new(1, 20), Stack::EMPTY, Stack::EMPTY];

        let rest = view.add(&mut slots, &Strict, Stack::new(1, 20));
        assert!(rest.is_empty());
        assert_eq!(slots, [Stack::new(1, 20), Stack::new(1, 20), Stack::EMPTY]);

        let rest = view.add(&mut slots, &Strict, Stack::new(1, 10));
        assert!(rest.is_empty());
        assert_eq!(slots, [Stack::new(1, 30), Stack::new(1, 20), Stack::EMPTY]);
    }

    #[test]
    fn test_add_empty_item_is_noop() {
        let view = section();
        let mut slots = [Stack::EMPTY; 8];
        let rest = view.add(&mut slots, &RULE, Stack::EMPTY);
        assert!(rest.is_empty());
        assert_eq!(slots, [Stack::EMPTY; 8]);
    }
}
