//! Adapter utilities for the `fastscroll` crate.
//!
//! The `fastscroll` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters of a media picker grid:
//!
//! - A [`Controller`] that turns fast-scroller transitions into ordered view [`Effect`]s
//!   (show/hide, list jumps, bubble labels)
//! - [`Delivery`], a value that is handed out exactly once, for picker results
//! - [`Selection`], the capped multi-pick model behind the grid
//!
//! This crate is intentionally framework-agnostic (no widget toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod delivery;
mod effect;
mod selection;


pub use controller::{Controller, SectionLabel};
pub use delivery::Delivery;
pub use effect::Effect;
pub use selection::{PickerResults, Selection, SelectionChange, Status};
