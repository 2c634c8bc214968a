//! Views over an explicit list of external slots.

use std::{collections::HashMap, sync::Arc};

use crate::SlotMapping;

/// A view mapping each local slot to an explicitly listed external slot.
///
/// The list may be in any order and may skip slots. If an external slot is
/// listed more than once, reverse lookups resolve to the first local slot
/// listing it.
///
/// # Examples
///
/// ```
/// use slotview_core::{Arbitrary, SlotMapping as _};
///
/// let view = Arbitrary::new([10, 12, 14, 16, 18]);
/// assert_eq!(view.size(), 5);
/// assert_eq!(view.local_to_external(2), Some(14));
/// assert_eq!(view.external_to_local(16), Some(3));
/// assert_eq!(view.external_to_local(11), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arbitrary {
    slots: Arc<[usize]>,
    locals: Arc<HashMap<usize, usize>>,
}

impl Arbitrary {
    /// Creates a view whose local slot `i` maps to the `i`-th listed slot.
    pub fn new<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let slots: Arc<[usize]> = slots.into_iter().collect();
        let mut locals = HashMap::with_capacity(slots.len());
        for (local, &slot) in slots.iter().enumerate() {
            locals.entry(slot).or_insert(local);
        }
        Self {
            slots,
            locals: Arc::new(locals),
        }
    }

    /// Returns the external slots in local order.
    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }
}

impl SlotMapping for Arbitrary {
    #[inline]
    fn size(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn local_to_external(&self, local: usize) -> Option<usize> {
        self.slots.get(local).copied()
    }

    #[inline]
    fn external_to_local(&self, external: usize) -> Option<usize> {
        self.locals.get(&external).copied()
    }

    #[inline]
    fn is_valid_external(&self, external: usize) -> bool {
        self.locals.contains_key(&external)
    }
}
