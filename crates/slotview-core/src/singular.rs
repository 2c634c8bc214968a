//! Single-slot views.

use crate::{SlotContainer, SlotMapping, View, ViewError};

/// A view known to contain exactly one slot.
///
/// `Singular` wraps any size-1 [`View`] and behaves exactly like it. The only
/// addition is that item access no longer needs a slot argument.
///
/// # Examples
///
/// ```
/// use slotview_core::{Singular, SlotMapping as _, View};
///
/// let fuel = View::contiguous(0, 3)?.fork(1)?;
/// let mut slots = [0_u32; 3];
/// fuel.set_item(&mut slots, 8);
/// assert_eq!(*fuel.item(&slots), 8);
/// assert_eq!(slots, [0, 8, 0]);
///
/// let from_list = Singular::try_from(View::arbitrary([1]))?;
/// assert_eq!(from_list.slot(), fuel.slot());
/// # Ok::<(), slotview_core::ViewError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Singular {
    view: View,
    slot: usize,
}

impl Singular {
    /// Returns the external slot of the only local slot.
    #[must_use]
    #[inline]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Returns the wrapped view.
    #[must_use]
    #[inline]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Unwraps the view.
    #[must_use]
    pub fn into_view(self) -> View {
        self.view
    }

    /// Returns the item in `container` at this view's slot.
    ///
    /// # Panics
    ///
    /// Panics if the container rejects the slot.
    pub fn item<'c, C>(&self, container: &'c C) -> &'c C::Item
    where
        C: SlotContainer + ?Sized,
    {
        container.item(self.slot)
    }

    /// Stores `item` in `container` at this view's slot.
    ///
    /// # Panics
    ///
    /// Panics if the container rejects the slot.
    pub fn set_item<C>(&self, container: &mut C, item: C::Item)
    where
        C: SlotContainer + ?Sized,
    {
        container.set_item(self.slot, item);
    }
}

impl TryFrom<View> for Singular {
    type Error = ViewError;

    fn try_from(view: View) -> Result<Self, Self::Error> {
        let size = view.size();
        match view.local_to_external(0) {
            Some(slot) if size == 1 => Ok(Self { view, slot }),
            _ => Err(ViewError::NotSingular { size }),
        }
    }
}

impl From<Singular> for View {
    fn from(singular: Singular) -> Self {
        singular.view
    }
}

impl AsRef<View> for Singular {
    fn as_ref(&self) -> &View {
        &self.view
    }
}

impl SlotMapping for Singular {
    #[inline]
    fn size(&self) -> usize {
        self.view.size()
    }

    #[inline]
    fn local_to_external(&self, local: usize) -> Option<usize> {
        self.view.local_to_external(local)
    }

    #[inline]
    fn external_to_local(&self, external: usize) -> Option<usize> {
        self.view.external_to_local(external)
    }

    #[inline]
    fn is_valid_local(&self, local: usize) -> bool {
        self.view.is_valid_local(local)
    }

    #[inline]
    fn is_valid_external(&self, external: usize) -> bool {
        self.view.is_valid_external(external)
    }
}
