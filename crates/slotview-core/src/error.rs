//! Errors raised while constructing views.

/// Error returned when a view cannot be built from the given parameters.
///
/// Only construction can fail. Asking an existing view about a slot it does
/// not map is not an error: conversions return `None` and validity queries
/// return `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ViewError {
    /// The lower bound of a contiguous range is greater than its upper bound.
    #[display("inverted slot range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Requested lower bound (inclusive).
        min: usize,
        /// Requested upper bound (exclusive).
        max: usize,
    },
    /// A single-slot view was requested for a slot whose successor overflows.
    #[display("slot {slot} is too large to form a single-slot view")]
    SlotOverflow {
        /// The requested slot.
        slot: usize,
    },
    /// The child of a join has more slots than its parent.
    #[display("child view has {child} slots but its parent only has {parent}")]
    ChildLargerThanParent {
        /// Size of the child view.
        child: usize,
        /// Size of the parent view.
        parent: usize,
    },
    /// The child of a join maps a local slot outside the parent's local range.
    #[display(
        "child local slot {local} maps to parent slot {parent_local}, outside the parent's {parent_size} slots"
    )]
    ChildOutsideParent {
        /// The child's local slot.
        local: usize,
        /// The parent local slot the child maps it to.
        parent_local: usize,
        /// Size of the parent view.
        parent_size: usize,
    },
    /// A view that must contain exactly one slot has a different size.
    #[display("expected a single-slot view, got a view with {size} slots")]
    NotSingular {
        /// Size of the offending view.
        size: usize,
    },
}
