//! A minimal item type and stacking rule.
//!
//! [`Stack`] and [`StackRule`] are enough to drive
//! [`SlotMapping::add`](crate::SlotMapping::add) in tests and examples
//! without a real item model.
//!
//! # Example
//!
//! ```
//! use slotview_core::{
//!     SlotMapping as _, View,
//!     testing::{Stack, StackRule},
//! };
//!
//! let rule = StackRule::new(64);
//! let view = View::contiguous(0, 3)?;
//! let mut slots = [Stack::new(1, 60), Stack::EMPTY, Stack::new(2, 5)];
//!
//! let rest = view.add(&mut slots, &rule, Stack::new(1, 10));
//! assert!(rest.is_empty());
//! assert_eq!(slots, [Stack::new(1, 64), Stack::new(1, 6), Stack::new(2, 5)]);
//! # Ok::<(), slotview_core::ViewError>(())
//! ```

use crate::StackingRule;

/// An amount of some kind of item. Amount zero is the empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stack {
    kind: u32,
    amount: u32,
}

impl Stack {
    /// The empty stack.
    pub const EMPTY: Self = Self { kind: 0, amount: 0 };

    /// Creates a stack of `amount` items of `kind`.
    #[must_use]
    pub const fn new(kind: u32, amount: u32) -> Self {
        if amount == 0 {
            Self::EMPTY
        } else {
            Self { kind, amount }
        }
    }

    /// Returns the item kind.
    #[must_use]
    pub const fn kind(&self) -> u32 {
        self.kind
    }

    /// Returns the number of items in the stack.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Returns `true` if the stack holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount == 0
    }
}

/// A stacking rule where stacks of the same kind merge up to a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackRule {
    max_size: u32,
}

impl StackRule {
    /// Creates a rule capping every stack at `max_size` items.
    #[must_use]
    pub const fn new(max_size: u32) -> Self {
        Self { max_size }
    }
}

impl StackingRule for StackRule {
    type Item = Stack;

    fn can_be_stacked(&self, item: &Stack, other: &Stack) -> bool {
        item.kind == other.kind
    }

    fn amount(&self, item: &Stack) -> u32 {
        item.amount
    }

    fn max_size(&self, _item: &Stack) -> u32 {
        self.max_size
    }

    fn can_apply(&self, _item: &Stack, amount: u32) -> bool {
        amount <= self.max_size
    }

    fn apply(&self, item: &Stack, amount: u32) -> Stack {
        Stack::new(item.kind, amount)
    }

    fn is_empty(&self, item: &Stack) -> bool {
        item.is_empty()
    }
}
