//! The composable view type.

use crate::{Arbitrary, ContiguousRange, Join, Singular, SlotMapping, Union, ViewError};

/// A mapping from local slots onto external slots, built from a fixed set of
/// kinds.
///
/// Views are immutable and hold no reference to any container. Cloning is
/// cheap: composite kinds share their children.
///
/// # Examples
///
/// Describing a 46-slot inventory whose slots 41 to 44 hold armor:
///
/// ```
/// use slotview_core::{SlotMapping as _, View};
///
/// let inventory = View::contiguous(0, 46)?;
/// let armor = inventory.fork_range(41, 45)?;
/// let boots = armor.fork(3)?;
///
/// assert_eq!(armor.size(), 4);
/// assert_eq!(boots.slot(), 44);
///
/// let mut slots = vec![0_u32; 46];
/// boots.set_item(&mut slots, 7);
/// assert_eq!(slots[44], 7);
/// assert_eq!(armor.collect(&slots), [0, 0, 0, 7]);
/// # Ok::<(), slotview_core::ViewError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A contiguous range of external slots.
    Contiguous(ContiguousRange),
    /// Several views placed one after another.
    Union(Union),
    /// An explicit list of external slots.
    Arbitrary(Arbitrary),
    /// A child view composed onto a parent view.
    Join(Join),
}

impl View {
    /// Creates a view over the external slots `min..max`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvertedRange`] if `min > max`.
    pub fn contiguous(min: usize, max: usize) -> Result<Self, ViewError> {
        let range = ContiguousRange::new(min, max)?;
        log::trace!("created contiguous view {min}..{max}");
        Ok(Self::Contiguous(range))
    }

    /// Creates a view over the single external slot `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SlotOverflow`] if `slot` is `usize::MAX`.
    pub fn singular(slot: usize) -> Result<Singular, ViewError> {
        let max = slot.checked_add(1).ok_or(ViewError::SlotOverflow { slot })?;
        Singular::try_from(Self::contiguous(slot, max)?)
    }

    /// Concatenates `views` in iteration order.
    pub fn union<I>(views: I) -> Self
    where
        I: IntoIterator<Item = View>,
    {
        let union = Union::new(views);
        log::trace!(
            "created union view of {} children, size {}",
            union.views().len(),
            union.size()
        );
        Self::Union(union)
    }

    /// Creates a view whose local slot `i` maps to the `i`-th listed slot.
    pub fn arbitrary<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let arbitrary = Arbitrary::new(slots);
        log::trace!("created arbitrary view of size {}", arbitrary.size());
        Self::Arbitrary(arbitrary)
    }

    /// Composes `child` onto `parent`, so that the child's external slots are
    /// read as the parent's local slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the child is larger than the parent or maps any slot
    /// outside the parent's local slots. See [`Join::new`].
    pub fn join(parent: View, child: View) -> Result<Self, ViewError> {
        let join = Join::new(parent, child)?;
        log::trace!("created join view of size {}", join.size());
        Ok(Self::Join(join))
    }

    /// Composes a single-slot `child` onto `parent`, keeping the single-slot
    /// capability.
    ///
    /// # Errors
    ///
    /// Same as [`View::join`].
    pub fn join_singular(parent: View, child: Singular) -> Result<Singular, ViewError> {
        Singular::try_from(Self::join(parent, child.into_view())?)
    }

    /// Creates a view over this view's local slots `min..max`.
    ///
    /// Equivalent to joining a contiguous view of `min..max` onto this view.
    ///
    /// # Errors
    ///
    /// Returns an error if `min > max` or `max` exceeds this view's size.
    pub fn fork_range(&self, min: usize, max: usize) -> Result<View, ViewError> {
        Self::join(self.clone(), Self::contiguous(min, max)?)
    }

    /// Creates a single-slot view over this view's local slot `local`.
    ///
    /// # Errors
    ///
    /// Returns an error if `local` is not a local slot of this view.
    pub fn fork(&self, local: usize) -> Result<Singular, ViewError> {
        Self::join_singular(self.clone(), Self::singular(local)?)
    }

    /// Creates a view over the listed local slots of this view, in the given
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if more slots are listed than this view has, or if any
    /// listed slot is not a local slot of this view.
    pub fn fork_many<I>(&self, locals: I) -> Result<View, ViewError>
    where
        I: IntoIterator<Item = usize>,
    {
        Self::join(self.clone(), Self::arbitrary(locals))
    }

    /// Returns an iterator over the local slots, `0..size()`.
    pub fn local_slots(&self) -> impl Iterator<Item = usize> + use<> {
        0..self.size()
    }

    /// Returns an iterator over the external slots, in local order.
    pub fn external_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.local_slots().filter_map(|local| self.local_to_external(local))
    }
}

impl SlotMapping for View {
    fn size(&self) -> usize {
        match self {
            Self::Contiguous(range) => range.size(),
            Self::Union(union) => union.size(),
            Self::Arbitrary(arbitrary) => arbitrary.size(),
            Self::Join(join) => join.size(),
        }
    }

    fn local_to_external(&self, local: usize) -> Option<usize> {
        match self {
            Self::Contiguous(range) => range.local_to_external(local),
            Self::Union(union) => union.local_to_external(local),
            Self::Arbitrary(arbitrary) => arbitrary.local_to_external(local),
            Self::Join(join) => join.local_to_external(local),
        }
    }

    fn external_to_local(&self, external: usize) -> Option<usize> {
        match self {
            Self::Contiguous(range) => range.external_to_local(external),
            Self::Union(union) => union.external_to_local(external),
            Self::Arbitrary(arbitrary) => arbitrary.external_to_local(external),
            Self::Join(join) => join.external_to_local(external),
        }
    }

    fn is_valid_local(&self, local: usize) -> bool {
        match self {
            Self::Contiguous(range) => range.is_valid_local(local),
            Self::Union(union) => union.is_valid_local(local),
            Self::Arbitrary(arbitrary) => arbitrary.is_valid_local(local),
            Self::Join(join) => join.is_valid_local(local),
        }
    }

    fn is_valid_external(&self, external: usize) -> bool {
        match self {
            Self::Contiguous(range) => range.is_valid_external(external),
            Self::Union(union) => union.is_valid_external(external),
            Self::Arbitrary(arbitrary) => arbitrary.is_valid_external(external),
            Self::Join(join) => join.is_valid_external(external),
        }
    }
}

impl From<ContiguousRange> for View {
    fn from(range: ContiguousRange) -> Self {
        Self::Contiguous(range)
    }
}

impl From<Union> for View {
    fn from(union: Union) -> Self {
        Self::Union(union)
    }
}

impl From<Arbitrary> for View {
    fn from(arbitrary: Arbitrary) -> Self {
        Self::Arbitrary(arbitrary)
    }
}

impl From<Join> for View {
    fn from(join: Join) -> Self {
        Self::Join(join)
    }
}
