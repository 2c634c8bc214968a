//! The player inventory.
//!
//! The player container has 46 slots:
//!
//! | Slots    | Section                         |
//! |----------|---------------------------------|
//! | `0..9`   | `contents.hotbar`               |
//! | `9..36`  | `contents.storage`              |
//! | `36`     | `crafting.output`               |
//! | `37..41` | `crafting.input` (2x2 grid)     |
//! | `41..45` | `armor`, helmet to boots        |
//! | `45`     | `offhand`                       |

use std::sync::LazyLock;

use slotview_core::{Singular, View, ViewError};

use crate::{Layout, standard};

/// The hotbar and main storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contents {
    /// Slots `0..36` of the player view.
    pub view: View,
    /// Slots `0..9` of [`view`](Self::view).
    pub hotbar: View,
    /// Slots `9..36` of [`view`](Self::view).
    pub storage: View,
}

impl Contents {
    fn new(player: &View) -> Result<Self, ViewError> {
        let view = player.fork_range(0, 36)?;
        Ok(Self {
            hotbar: view.fork_range(0, 9)?,
            storage: view.fork_range(9, 36)?,
            view,
        })
    }
}

/// The 2x2 crafting grid with its result slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCrafting {
    /// Slots `36..41` of the player view.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub output: Singular,
    /// Slots `1..5` of [`view`](Self::view).
    pub input: View,
}

impl PlayerCrafting {
    fn new(player: &View) -> Result<Self, ViewError> {
        let view = player.fork_range(36, 41)?;
        Ok(Self {
            output: view.fork(0)?,
            input: view.fork_range(1, 5)?,
            view,
        })
    }
}

/// The four armor slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armor {
    /// Slots `41..45` of the player view.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub helmet: Singular,
    /// Slot 1 of [`view`](Self::view).
    pub chestplate: Singular,
    /// Slot 2 of [`view`](Self::view).
    pub leggings: Singular,
    /// Slot 3 of [`view`](Self::view).
    pub boots: Singular,
}

impl Armor {
    fn new(player: &View) -> Result<Self, ViewError> {
        let view = player.fork_range(41, 45)?;
        Ok(Self {
            helmet: view.fork(0)?,
            chestplate: view.fork(1)?,
            leggings: view.fork(2)?,
            boots: view.fork(3)?,
            view,
        })
    }
}

/// A player inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Slots `0..46`.
    pub view: View,
    /// Slots `0..36` of [`view`](Self::view).
    pub contents: Contents,
    /// Slots `36..41` of [`view`](Self::view).
    pub crafting: PlayerCrafting,
    /// Slots `41..45` of [`view`](Self::view).
    pub armor: Armor,
    /// Slot 45 of [`view`](Self::view).
    pub offhand: Singular,
}

impl Player {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 46)?;
        Ok(Self {
            contents: Contents::new(&view)?,
            crafting: PlayerCrafting::new(&view)?,
            armor: Armor::new(&view)?,
            offhand: view.fork(45)?,
            view,
        })
    }
}

impl Layout for Player {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![
            ("contents", &self.contents.view),
            ("contents.hotbar", &self.contents.hotbar),
            ("contents.storage", &self.contents.storage),
            ("crafting", &self.crafting.view),
            ("crafting.output", self.crafting.output.view()),
            ("crafting.input", &self.crafting.input),
            ("armor", &self.armor.view),
            ("armor.helmet", self.armor.helmet.view()),
            ("armor.chestplate", self.armor.chestplate.view()),
            ("armor.leggings", self.armor.leggings.view()),
            ("armor.boots", self.armor.boots.view()),
            ("offhand", self.offhand.view()),
        ]
    }
}

/// A player inventory.
pub static PLAYER: LazyLock<Player> = LazyLock::new(|| standard("player", Player::new));
