//! Composable slot views for fixed-size slot containers.
//!
//! A view gives a contiguous range of *local* slot ids, `0..size`, and
//! translates each of them to and from an *external* slot id understood by
//! whatever sits below it: a container, or another view. Views never hold a
//! container. Each operation that reads or writes items takes the container
//! as an argument, so one view definition serves any number of containers.
//!
//! # Overview
//!
//! 1. **The contract** - [`SlotMapping`]: size, the two conversions, the two
//!    validity queries, and container helpers (`get`, `set`, `add`, `fill`,
//!    `clear`, `collect`) built on top of them.
//!
//! 2. **View kinds** - combined in the [`View`] enum:
//!    - [`ContiguousRange`]: external slots `min..max`
//!    - [`Arbitrary`]: an explicit list of external slots
//!    - [`Union`]: several views placed one after another
//!    - [`Join`]: a child view read through a parent view
//!
//! 3. **Single slots** - [`Singular`] wraps any size-1 view and offers
//!    slot-less item access.
//!
//! 4. **Containers** - [`SlotContainer`] for indexed storage and
//!    [`StackingRule`] for merging items, see [`container`].
//!
//! Looking up a slot a view does not map is not an error: conversions return
//! `None`. Only construction fails, with a [`ViewError`].
//!
//! # Examples
//!
//! ```
//! use slotview_core::{SlotMapping as _, View};
//!
//! // A furnace: input, fuel, output.
//! let furnace = View::contiguous(0, 3)?;
//! let fuel = furnace.fork(1)?;
//!
//! // Input and output, skipping the fuel slot.
//! let ends = furnace.fork_many([0, 2])?;
//! assert_eq!(ends.local_to_external(1), Some(2));
//! assert_eq!(ends.external_to_local(1), None);
//!
//! let mut slots = vec!["ore", "coal", ""];
//! assert_eq!(*fuel.item(&slots), "coal");
//! ends.fill(&mut slots, |_| "ash");
//! assert_eq!(slots, ["ash", "coal", "ash"]);
//! # Ok::<(), slotview_core::ViewError>(())
//! ```

pub mod arbitrary;
pub mod container;
pub mod contiguous;
pub mod error;
pub mod join;
pub mod mapping;
pub mod singular;
pub mod testing;
pub mod union;
pub mod view;

// Re-export commonly used types
pub use self::{
    arbitrary::Arbitrary,
    container::{SlotContainer, StackingRule},
    contiguous::ContiguousRange,
    error::ViewError,
    join::Join,
    mapping::SlotMapping,
    singular::Singular,
    union::Union,
    view::View,
};
