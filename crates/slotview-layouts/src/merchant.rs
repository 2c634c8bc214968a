//! The merchant trading screen.

use std::sync::LazyLock;

use slotview_core::{Singular, View, ViewError};

use crate::{Layout, standard};

/// The two payment slots of a trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantInput {
    /// Slots `0..2` of the merchant view.
    pub view: View,
    /// Slot 0 of [`view`](Self::view).
    pub left: Singular,
    /// Slot 1 of [`view`](Self::view).
    pub right: Singular,
}

/// A merchant: two payment slots and the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merchant {
    /// Slots `0..3`.
    pub view: View,
    /// Slots `0..2` of [`view`](Self::view).
    pub input: MerchantInput,
    /// Slot 2 of [`view`](Self::view).
    pub output: Singular,
}

impl Merchant {
    fn new() -> Result<Self, ViewError> {
        let view = View::contiguous(0, 3)?;
        let input = view.fork_range(0, 2)?;
        Ok(Self {
            input: MerchantInput {
                left: input.fork(0)?,
                right: input.fork(1)?,
                view: input,
            },
            output: view.fork(2)?,
            view,
        })
    }
}

impl Layout for Merchant {
    fn view(&self) -> &View {
        &self.view
    }

    fn sections(&self) -> Vec<(&'static str, &View)> {
        vec![
            ("input", &self.input.view),
            ("input.left", self.input.left.view()),
            ("input.right", self.input.right.view()),
            ("output", self.output.view()),
        ]
    }
}

/// A merchant.
pub static MERCHANT: LazyLock<Merchant> = LazyLock::new(|| standard("merchant", Merchant::new));
