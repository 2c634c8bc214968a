//! Plain storage containers.

use std::sync::LazyLock;

use slotview_core::{View, ViewError};

use crate::{Layout, standard};

/// A container whose every slot is general storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    /// Slots `0..size`.
    pub view: View,
    /// All slots of [`view`](Self::view).
    pub storage: View,
}

impl Storage {
    fn new(size: usize) -> Result<Self, ViewError> {
        let view = View::contiguous(0, size)?;
        let storage = view.fork_range(0, size)?;
        Ok(Self { view, storage })
    }
}

impl Layout for Storage {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![("storage", &self.storage)]
    }
}

/// A barrel: 27 storage slots.
pub static BARREL: LazyLock<Storage> = LazyLock::new(|| standard("barrel", || Storage::new(27)));

/// A single chest: 27 storage slots.
pub static CHEST: LazyLock<Storage> = LazyLock::new(|| standard("chest", || Storage::new(27)));

/// A dispenser: 9 storage slots.
pub static DISPENSER: LazyLock<Storage> =
    LazyLock::new(|| standard("dispenser", || Storage::new(9)));

/// A double chest: 54 storage slots.
pub static DOUBLE_CHEST: LazyLock<Storage> =
    LazyLock::new(|| standard("double chest", || Storage::new(54)));

/// A dropper: 9 storage slots.
pub static DROPPER: LazyLock<Storage> = LazyLock::new(|| standard("dropper", || Storage::new(9)));

/// An ender chest: 27 storage slots.
pub static ENDER_CHEST: LazyLock<Storage> =
    LazyLock::new(|| standard("ender chest", || Storage::new(27)));

/// A hopper: 5 storage slots.
pub static HOPPER: LazyLock<Storage> = LazyLock::new(|| standard("hopper", || Storage::new(5)));

/// A shulker box: 27 storage slots.
pub static SHULKER_BOX: LazyLock<Storage> =
    LazyLock::new(|| standard("shulker box", || Storage::new(27)));

#[cfg(test)]
mod tests {
    use slotview_core::{
        SlotMapping as _,
        testing::{Stack, StackRule},
    };

    use super::*;

    #[test]
    fn test_sizes() {
        for (layout, size) in [
            (&*BARREL, 27),
            (&*CHEST, 27),
            (&*DISPENSER, 9),
            (&*DOUBLE_CHEST, 54),
            (&*DROPPER, 9),
            (&*ENDER_CHEST, 27),
            (&*HOPPER, 5),
            (&*SHULKER_BOX, 27),
        ] {
            assert_eq!(layout.view.size(), size);
            assert_eq!(layout.storage.size(), size);
            assert_eq!(layout.storage.local_to_external(size - 1), Some(size - 1));
        }
    }

    #[test]
    fn test_add_fills_hopper() {
        let rule = StackRule::new(64);
        let mut slots = [Stack::EMPTY; 5];
        for _ in 0..5 {
            let rest = HOPPER.storage.add(&mut slots, &rule, Stack::new(3, 64));
            assert!(rest.is_empty());
        }
        let rest = HOPPER.storage.add(&mut slots, &rule, Stack::new(3, 1));
        assert_eq!(rest, Stack::new(3, 1));
        assert_eq!(slots, [Stack::new(3, 64); 5]);
    }
}
