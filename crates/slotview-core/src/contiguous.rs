//! Views over a contiguous range of external slots.

use crate::{SlotMapping, ViewError};

/// A view mapping local slots `0..max - min` onto external slots `min..max`.
///
/// # Examples
///
/// ```
/// use slotview_core::{ContiguousRange, SlotMapping as _};
///
/// let range = ContiguousRange::new(4, 12)?;
/// assert_eq!(range.size(), 8);
/// assert_eq!(range.local_to_external(0), Some(4));
/// assert_eq!(range.external_to_local(11), Some(7));
/// assert_eq!(range.local_to_external(8), None);
/// # Ok::<(), slotview_core::ViewError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContiguousRange {
    min: usize,
    max: usize,
}

impl ContiguousRange {
    /// Creates a view over the external slots `min..max`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvertedRange`] if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ViewError> {
        if min > max {
            log::debug!("rejected contiguous range {min}..{max}");
            return Err(ViewError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the first external slot (inclusive).
    #[must_use]
    #[inline]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Returns the end of the external range (exclusive).
    #[must_use]
    #[inline]
    pub const fn max(&self) -> usize {
        self.max
    }
}

impl SlotMapping for ContiguousRange {
    #[inline]
    fn size(&self) -> usize {
        self.max - self.min
    }

    #[inline]
    fn local_to_external(&self, local: usize) -> Option<usize> {
        self.is_valid_local(local).then(|| local + self.min)
    }

    #[inline]
    fn external_to_local(&self, external: usize) -> Option<usize> {
        self.is_valid_external(external).then(|| external - self.min)
    }

    #[inline]
    fn is_valid_external(&self, external: usize) -> bool {
        (self.min..self.max).contains(&external)
    }
}
