//! Standard container layouts described with slot views.
//!
//! Each layout is a process-wide static holding a root [`View`] over the
//! container and named sub-views forked from it, so client code can address
//! "the fuel slot" or "the hotbar" without knowing the absolute slot ids.
//! Layouts are built on first use and never change afterwards.
//!
//! # Examples
//!
//! ```
//! use slotview_core::SlotMapping as _;
//! use slotview_layouts::{FURNACE, PLAYER};
//!
//! assert_eq!(FURNACE.fuel.slot(), 1);
//! assert_eq!(PLAYER.armor.boots.slot(), 44);
//! assert_eq!(PLAYER.contents.storage.local_to_external(0), Some(9));
//! ```

use slotview_core::{View, ViewError};

pub use self::{
    merchant::{MERCHANT, Merchant, MerchantInput},
    player::{Armor, Contents, PLAYER, Player, PlayerCrafting},
    station::{
        ANVIL, BEACON, BLAST_FURNACE, BREWING_STAND, Beacon, BrewingStand, CARTOGRAPHY_TABLE,
        CRAFTING_TABLE, Combiner, CraftingTable, ENCHANTING_TABLE, EnchantingTable, FURNACE,
        GRINDSTONE, Grindstone, LECTERN, LOOM, Lectern, Loom, SMITHING, SMOKER, STONECUTTER,
        Smelter, Smithing, Stonecutter,
    },
    storage::{
        BARREL, CHEST, DISPENSER, DOUBLE_CHEST, DROPPER, ENDER_CHEST, HOPPER, SHULKER_BOX,
        Storage,
    },
};

mod merchant;
mod player;
mod station;
mod storage;

/// A named arrangement of sub-views over one container.
pub trait Layout {
    /// Returns the view over the whole container.
    fn view(&self) -> &View;

    /// Returns every named sub-view, outermost first.
    ///
    /// Nested sections are named with a dot, such as `contents.hotbar`.
    fn sections(&self) -> Vec<(&'static str, &View)>;
}

/// Returns every standard layout with its name, in alphabetical order.
#[must_use]
pub fn all() -> [(&'static str, &'static dyn Layout); 24] {
    [
        ("anvil", &*ANVIL),
        ("barrel", &*BARREL),
        ("beacon", &*BEACON),
        ("blast_furnace", &*BLAST_FURNACE),
        ("brewing_stand", &*BREWING_STAND),
        ("cartography_table", &*CARTOGRAPHY_TABLE),
        ("chest", &*CHEST),
        ("crafting_table", &*CRAFTING_TABLE),
        ("dispenser", &*DISPENSER),
        ("double_chest", &*DOUBLE_CHEST),
        ("dropper", &*DROPPER),
        ("enchanting_table", &*ENCHANTING_TABLE),
        ("ender_chest", &*ENDER_CHEST),
        ("furnace", &*FURNACE),
        ("grindstone", &*GRINDSTONE),
        ("hopper", &*HOPPER),
        ("lectern", &*LECTERN),
        ("loom", &*LOOM),
        ("merchant", &*MERCHANT),
        ("player", &*PLAYER),
        ("shulker_box", &*SHULKER_BOX),
        ("smithing", &*SMITHING),
        ("smoker", &*SMOKER),
        ("stonecutter", &*STONECUTTER),
    ]
}

/// Looks up a standard layout by name, as listed by [`all`].
#[must_use]
pub fn by_name(name: &str) -> Option<&'static dyn Layout> {
    all()
        .into_iter()
        .find_map(|(layout_name, layout)| (layout_name == name).then_some(layout))
}

/// Builds a standard layout, panicking if its fixed slot numbers are
/// inconsistent.
pub(crate) fn standard<T>(name: &str, build: impl FnOnce() -> Result<T, ViewError>) -> T {
    match build() {
        Ok(layout) => {
            log::debug!("initialized standard {name} layout");
            layout
        }
        Err(err) => panic!("standard {name} layout is malformed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use slotview_core::SlotMapping as _;

    use super::*;

    #[test]
    fn test_names_are_unique_and_resolvable() {
        let layouts = all();
        assert_eq!(layouts.len(), 24);
        for (name, layout) in &layouts {
            let found = by_name(name).unwrap();
            assert_eq!(found.view(), layout.view());
        }
        let names = layouts.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        assert_eq!(names.iter().collect::<BTreeSet<_>>().len(), 24);
        assert!(names.is_sorted());
        assert!(by_name("cauldron").is_none());
    }

    #[test]
    fn test_sections_stay_inside_root_view() {
        for (name, layout) in all() {
            let root = layout.view();
            assert!(root.size() > 0, "{name} is empty");
            for (section, view) in layout.sections() {
                assert!(view.size() <= root.size(), "{name}.{section} is too large");
                for external in view.external_slots() {
                    assert!(
                        root.is_valid_external(external),
                        "{name}.{section} maps outside the container: {external}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_root_views_start_at_zero() {
        for (name, layout) in all() {
            let root = layout.view();
            assert_eq!(
                root.external_slots().collect::<Vec<_>>(),
                (0..root.size()).collect::<Vec<_>>(),
                "{name}"
            );
        }
    }
}
