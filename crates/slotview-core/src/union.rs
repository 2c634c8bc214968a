//! Concatenation of views.

use std::sync::Arc;

use crate::{SlotMapping, View};

/// A view placing the local slots of several views one after another.
///
/// The first child's local slots come first, the second child's follow at an
/// offset equal to the first child's size, and so on. When two children map
/// the same external slot, reverse lookups resolve to the earlier child.
///
/// # Examples
///
/// ```
/// use slotview_core::{SlotMapping as _, Union, View};
///
/// let union = Union::new([View::contiguous(30, 40)?, View::contiguous(10, 20)?]);
/// assert_eq!(union.size(), 20);
/// assert_eq!(union.local_to_external(0), Some(30));
/// assert_eq!(union.local_to_external(10), Some(10));
/// assert_eq!(union.external_to_local(15), Some(15));
/// # Ok::<(), slotview_core::ViewError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    views: Arc<[View]>,
    size: usize,
}

impl Union {
    /// Concatenates `views` in iteration order.
    pub fn new<I>(views: I) -> Self
    where
        I: IntoIterator<Item = View>,
    {
        let views: Arc<[View]> = views.into_iter().collect();
        let size = views.iter().map(SlotMapping::size).sum();
        Self { views, size }
    }

    /// Returns the concatenated views, in order.
    #[must_use]
    pub fn views(&self) -> &[View] {
        &self.views
    }
}

impl SlotMapping for Union {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    fn local_to_external(&self, local: usize) -> Option<usize> {
        let mut local = local;
        for view in &*self.views {
            let size = view.size();
            if local < size {
                return view.local_to_external(local);
            }
            local -= size;
        }
        None
    }

    fn external_to_local(&self, external: usize) -> Option<usize> {
        let mut offset = 0;
        for view in &*self.views {
            if let Some(local) = view.external_to_local(external) {
                return Some(offset + local);
            }
            offset += view.size();
        }
        None
    }

    fn is_valid_external(&self, external: usize) -> bool {
        self.views.iter().any(|view| view.is_valid_external(external))
    }
}
