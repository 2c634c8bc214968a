//! Work stations: containers whose slots have dedicated roles.

use std::sync::LazyLock;

use slotview_core::{Singular, View, ViewError};

use crate::{Layout, standard};

/// A smelting container: furnace, blast furnace or smoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Smelter {
    /// Slots `0..3`.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub input: Singular,
    /// Slot 1 of [`view`](Self::view).
    pub fuel: Singular,
    /// Slot 2 of [`view`](Self::view).
    pub output: Singular,
}

impl Smelter {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 3)?;
        Ok(Self {
            input: view.fork(0)?,
            fuel: view.fork(1)?,
            output: view.fork(2)?,
            view,
        })
    }
}

impl Layout for Smelter {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![
            ("input", self.input.view()),
            ("fuel", self.fuel.view()),
            ("output", self.output.view()),
        ]
    }
}

/// A container combining an input with a modifier: anvil or cartography table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combiner {
    /// Slots `0..3`.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub input: Singular,
    /// Slot 1 of [`view`](Self::view).
    pub modifier: Singular,
    /// Slot 2 of [`view`](Self::view).
    pub output: Singular,
}

impl Combiner {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 3)?;
        Ok(Self {
            input: view.fork(0)?,
            modifier: view.fork(1)?,
            output: view.fork(2)?,
            view,
        })
    }
}

impl Layout for Combiner {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![
            ("input", self.input.view()),
            ("modifier", self.modifier.view()),
            ("output", self.output.view()),
        ]
    }
}

/// A beacon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beacon {
    /// Slot 0.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub sacrifice: Singular,
}

impl Beacon {
    fn new() -> Result<Self, ViewError> {
        let view = View::singular(0)?.into_view();
        Ok(Self {
            sacrifice: view.fork(0)?,
            view,
        })
    }
}

impl Layout for Beacon {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![("sacrifice", self.sacrifice.view())]
    }
}

/// A lectern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lectern {
    /// Slot 0.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub book: Singular,
}

impl Lectern {
    fn new() -> Result<Self, ViewError> {
        let view = View::singular(0)?.into_view();
        Ok(Self {
            book: view.fork(0)?,
            view,
        })
    }
}

impl Layout for Lectern {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![("book", self.book.view())]
    }
}

/// A brewing stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrewingStand {
    /// Slots `0..5`.
    pub view: View,
    /// Slots `0..3` of [`view`](Self::view).
    pub bottles: View,
    /// Slot 3 of [`view`](Self::view).
    pub ingredient: Singular,
    /// Slot 4 of [`view`](Self::view).
    pub fuel: Singular,
}

impl BrewingStand {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 5)?;
        Ok(Self {
            bottles: view.fork_range(0, 3)?,
            ingredient: view.fork(3)?,
            fuel: view.fork(4)?,
            view,
        })
    }
}

impl Layout for BrewingStand {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![
            ("bottles", &self.bottles),
            ("ingredient", self.ingredient.view()),
            ("fuel", self.fuel.view()),
        ]
    }
}

/// A crafting table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftingTable {
    /// Slots `0..10`.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub output: Singular,
    /// Slots `1..10` of [`view`](Self::view), the 3x3 grid in row-major order.
    pub input: View,
}

impl CraftingTable {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 10)?;
        Ok(Self {
            output: view.fork(0)?,
            input: view.fork_range(1, 10)?,
            view,
        })
    }
}

impl Layout for CraftingTable {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![("output", self.output.view()), ("input", &self.input)]
    }
}

/// An enchanting table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnchantingTable {
    /// Slots `0..2`.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub item: Singular,
    /// Slot 1 of [`view`](Self::view).
    pub fuel: Singular,
}

impl EnchantingTable {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 2)?;
        Ok(Self {
            item: view.fork(0)?,
            fuel: view.fork(1)?,
            view,
        })
    }
}

impl Layout for EnchantingTable {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![("item", self.item.view()), ("fuel", self.fuel.view())]
    }
}

/// A grindstone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grindstone {
    /// Slots `0..3`.
    pub view: View,
    /// Slots `0..2` of [`view`](Self::view).
    pub input: View,
    /// Slot 2 of [`view`](Self::view).
    pub output: Singular,
}

impl Grindstone {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 3)?;
        Ok(Self {
            input: view.fork_range(0, 2)?,
            output: view.fork(2)?,
            view,
        })
    }
}

impl Layout for Grindstone {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![("input", &self.input), ("output", self.output.view())]
    }
}

/// A loom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loom {
    /// Slots `0..4`.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub banner: Singular,
    /// Slot 1 of [`view`](Self::view).
    pub color: Singular,
    /// Slot 2 of [`view`](Self::view).
    pub pattern: Singular,
    /// Slot 3 of [`view`](Self::view).
    pub output: Singular,
}

impl Loom {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 4)?;
        Ok(Self {
            banner: view.fork(0)?,
            color: view.fork(1)?,
            pattern: view.fork(2)?,
            output: view.fork(3)?,
            view,
        })
    }
}

impl Layout for Loom {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![
            ("banner", self.banner.view()),
            ("color", self.color.view()),
            ("pattern", self.pattern.view()),
            ("output", self.output.view()),
        ]
    }
}

/// A smithing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Smithing {
    /// Slots `0..4`.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub template: Singular,
    /// Slot 1 of [`view`](Self::view).
    pub base: Singular,
    /// Slot 2 of [`view`](Self::view).
    pub addition: Singular,
    /// Slot 3 of [`view`](Self::view).
    pub output: Singular,
}

impl Smithing {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 4)?;
        Ok(Self {
            template: view.fork(0)?,
            base: view.fork(1)?,
            addition: view.fork(2)?,
            output: view.fork(3)?,
            view,
        })
    }
}

impl Layout for Smithing {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![
            ("template", self.template.view()),
            ("base", self.base.view()),
            ("addition", self.addition.view()),
            ("output", self.output.view()),
        ]
    }
}

/// A stonecutter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stonecutter {
    /// Slots `0..2`.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub input: Singular,
    /// Slot 1 of [`view`](Self::view).
    pub output: Singular,
}

impl Stonecutter {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 2)?;
        Ok(Self {
            input: view.fork(0)?,
            output: view.fork(1)?,
            view,
        })
    }
}

impl Layout for Stonecutter {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![("input", self.input.view()), ("output", self.output.view())]
    }
}

/// An anvil.
pub static ANVIL: LazyLock<Combiner> = LazyLock::new(|| standard("anvil", Combiner::new));

/// A beacon.
pub static BEACON: LazyLock<Beacon> = LazyLock::new(|| standard("beacon", Beacon::new));

/// A blast furnace.
pub static BLAST_FURNACE: LazyLock<Smelter> =
    LazyLock::new(|| standard("blast furnace", Smelter::new));

/// A brewing stand.
pub static BREWING_STAND: LazyLock<BrewingStand> =
    LazyLock::new(|| standard("brewing stand", BrewingStand::new));

/// A cartography table.
pub static CARTOGRAPHY_TABLE: LazyLock<Combiner> =
    LazyLock::new(|| standard("cartography table", Combiner::new));

/// A crafting table.
pub static CRAFTING_TABLE: LazyLock<CraftingTable> =
    LazyLock::new(|| standard("crafting table", CraftingTable::new));

/// An enchanting table.
pub static ENCHANTING_TABLE: LazyLock<EnchantingTable> =
    LazyLock::new(|| standard("enchanting table", EnchantingTable::new));

/// A furnace.
pub static FURNACE: LazyLock<Smelter> = LazyLock::new(|| standard("furnace", Smelter::new));

/// A grindstone.
pub static GRINDSTONE: LazyLock<Grindstone> =
    LazyLock::new(|| standard("grindstone", Grindstone::new));

/// A lectern.
pub static LECTERN: LazyLock<Lectern> = LazyLock::new(|| standard("lectern", Lectern::new));

/// A loom.
pub static LOOM: LazyLock<Loom> = LazyLock::new(|| standard("loom", Loom::new));

/// A smithing table.
pub static SMITHING: LazyLock<Smithing> = LazyLock::new(|| standard("smithing", Smithing::new));

/// A smoker.
pub static SMOKER: LazyLock<Smelter> = LazyLock::new(|| standard("smoker", Smelter::new));

/// A stonecutter.
pub static STONECUTTER: LazyLock<Stonecutter> =
    LazyLock::new(|| standard("stonecutter", Stonecutter::new));

#[cfg(test)]
mod tests {
    use slotview_core::SlotMapping as _;

    use super::*;

    #[test]
    fn test_single_slot_roles() {
        let cases = [
            (&ANVIL.input, 0),
            (&ANVIL.modifier, 1),
            (&ANVIL.output, 2),
            (&BEACON.sacrifice, 0),
            (&BREWING_STAND.ingredient, 3),
            (&BREWING_STAND.fuel, 4),
            (&CRAFTING_TABLE.output, 0),
            (&ENCHANTING_TABLE.fuel, 1),
            (&FURNACE.fuel, 1),
            (&GRINDSTONE.output, 2),
            (&LECTERN.book, 0),
            (&LOOM.pattern, 2),
            (&LOOM.output, 3),
            (&SMITHING.template, 0),
            (&SMITHING.addition, 2),
            (&SMOKER.output, 2),
            (&STONECUTTER.output, 1),
        ];
        for (view, slot) in cases {
            assert_eq!(view.slot(), slot);
            assert_eq!(view.external_to_local(slot), Some(0));
        }
    }

    #[test]
    fn test_ranged_roles() {
        assert_eq!(BREWING_STAND.bottles.external_slots().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(GRINDSTONE.input.external_slots().collect::<Vec<_>>(), [0, 1]);
        assert_eq!(
            CRAFTING_TABLE.input.external_slots().collect::<Vec<_>>(),
            (1..10).collect::<Vec<_>>()
        );
        assert_eq!(CRAFTING_TABLE.input.external_to_local(0), None);
    }

    #[test]
    fn test_smelters_share_shape() {
        assert_eq!(*FURNACE, *SMOKER);
        assert_eq!(*FURNACE, *BLAST_FURNACE);
        assert_eq!(*ANVIL, *CARTOGRAPHY_TABLE);
    }

    #[test]
    fn test_furnace_slots_in_container() {
        let mut slots = ["", "", ""];
        FURNACE.input.set_item(&mut slots, "ore");
        FURNACE.fuel.set_item(&mut slots, "coal");
        assert_eq!(slots, ["ore", "coal", ""]);
        assert_eq!(*FURNACE.output.item(&slots), "");
        FURNACE.view.clear(&mut slots);
        assert_eq!(slots, ["", "", ""]);
    }
}
