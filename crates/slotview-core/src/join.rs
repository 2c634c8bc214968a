//! Composition of two views.

use std::sync::Arc;

use crate::{SlotMapping, View, ViewError};

/// A view feeding the external slots of a child into the local slots of a
/// parent.
///
/// The joined view has the child's local slots and a subset of the parent's
/// external slots: local slot `l` maps to
/// `parent.local_to_external(child.local_to_external(l))`.
///
/// # Examples
///
/// ```
/// use slotview_core::{Join, SlotMapping as _, View};
///
/// let join = Join::new(View::contiguous(10, 60)?, View::contiguous(20, 30)?)?;
/// assert_eq!(join.size(), 10);
/// assert_eq!(join.local_to_external(0), Some(30));
/// assert_eq!(join.external_to_local(39), Some(9));
/// # Ok::<(), slotview_core::ViewError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    parent: Arc<View>,
    child: Arc<View>,
}

impl Join {
    /// Joins `child` onto `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ChildLargerThanParent`] if the child has more slots
    /// than the parent, and [`ViewError::ChildOutsideParent`] if the child maps
    /// any of its slots outside the parent's local slots.
    pub fn new(parent: View, child: View) -> Result<Self, ViewError> {
        let (parent_size, child_size) = (parent.size(), child.size());
        if child_size > parent_size {
            log::debug!("rejected join: child size {child_size} exceeds parent size {parent_size}");
            return Err(ViewError::ChildLargerThanParent {
                child: child_size,
                parent: parent_size,
            });
        }
        for local in 0..child_size {
            let Some(parent_local) = child.local_to_external(local) else {
                continue;
            };
            if !parent.is_valid_local(parent_local) {
                log::debug!(
                    "rejected join: child slot {local} maps to {parent_local}, parent has {parent_size} slots"
                );
                return Err(ViewError::ChildOutsideParent {
                    local,
                    parent_local,
                    parent_size,
                });
            }
        }
        Ok(Self {
            parent: Arc::new(parent),
            child: Arc::new(child),
        })
    }

    /// Returns the parent view.
    #[must_use]
    pub fn parent(&self) -> &View {
        &self.parent
    }

    /// Returns the child view.
    #[must_use]
    pub fn child(&self) -> &View {
        &self.child
    }
}

impl SlotMapping for Join {
    #[inline]
    fn size(&self) -> usize {
        self.child.size()
    }

    fn local_to_external(&self, local: usize) -> Option<usize> {
        self.child
            .local_to_external(local)
            .filter(|&parent_local| self.parent.is_valid_local(parent_local))
            .and_then(|parent_local| self.parent.local_to_external(parent_local))
    }

    fn external_to_local(&self, external: usize) -> Option<usize> {
        self.parent
            .external_to_local(external)
            .filter(|&parent_local| self.child.is_valid_external(parent_local))
            .and_then(|parent_local| self.child.external_to_local(parent_local))
    }

    fn is_valid_local(&self, local: usize) -> bool {
        self.child.is_valid_local(local)
            && self
                .child
                .local_to_external(local)
                .is_some_and(|parent_local| self.parent.is_valid_local(parent_local))
    }

    fn is_valid_external(&self, external: usize) -> bool {
        self.parent.is_valid_external(external)
            && self
                .parent
                .external_to_local(external)
                .is_some_and(|parent_local| self.child.is_valid_external(parent_local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contiguous(min: usize, max: usize) -> View {
        View::contiguous(min, max).unwrap()
    }

    #[test]
    fn test_chaining() {
        let join = Join::new(contiguous(50, 15000), contiguous(40, 70)).unwrap();
        assert_eq!(join.size(), 30);
        for i in 0..30 {
            assert_eq!(join.local_to_external(i), Some(90 + i));
            assert_eq!(join.external_to_local(90 + i), Some(i));
        }
        assert_eq!(join.local_to_external(30), None);
        assert_eq!(join.external_to_local(89), None);
        assert_eq!(join.external_to_local(120), None);
    }

    #[test]
    fn test_external_outside_child_is_invalid() {
        // parent maps 10..60, child only covers parent locals 20..30
        let join = Join::new(contiguous(10, 60), contiguous(20, 30)).unwrap();
        assert!(join.is_valid_external(30));
        assert!(!join.is_valid_external(10));
        assert!(!join.is_valid_external(40));
        assert_eq!(join.external_to_local(10), None);
    }

    #[test]
    fn test_rejects_larger_child() {
        assert_eq!(
            Join::new(contiguous(0, 10), contiguous(0, 20)),
            Err(ViewError::ChildLargerThanParent {
                child: 20,
                parent: 10
            })
        );
        assert!(Join::new(contiguous(10, 20), contiguous(0, 20)).is_err());
        assert!(Join::new(contiguous(0, 10), contiguous(50, 70)).is_err());
    }

    #[test]
    fn test_rejects_child_outside_parent() {
        assert_eq!(
            Join::new(contiguous(0, 30), contiguous(50, 70)),
            Err(ViewError::ChildOutsideParent {
                local: 0,
                parent_local: 50,
                parent_size: 30
            })
        );
        assert_eq!(
            Join::new(contiguous(0, 10), View::arbitrary([1, 2, 10])),
            Err(ViewError::ChildOutsideParent {
                local: 2,
                parent_local: 10,
                parent_size: 10
            })
        );
    }
}
