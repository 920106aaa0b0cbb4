//! A headless fast-scroll handle engine.
//!
//! For adapter-level utilities (view effects, section labels, one-shot results), see the
//! `fastscroll-adapter` crate.
//!
//! This crate covers the mechanics behind a draggable scrollbar handle overlaid on a long list:
//! mapping a vertical touch to a list position, mapping the list's scroll proportion back to a
//! handle position, placing the handle and its bubble indicator, and hiding the scrollbar after a
//! cancelable delay.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - touch events on the handle (down/move/up/cancel)
//! - list scroll metrics (offset, content range, viewport)
//! - a monotonic clock (`now_ms`) and a periodic `tick`
//!
//! All inputs are clamped; nothing here returns an error.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod mapping;
mod options;
mod scroller;
mod state;
mod timer;
mod types;

#[cfg(test)]
mod tests;

pub use mapping::{
    bubble_top, compute_proportion, handle_top, map_proportion_to_handle_y,
    map_touch_y_to_list_position, touch_proportion,
};
pub use options::{DEFAULT_HIDE_DELAY_MS, FastScrollOptions, OnChangeCallback};
pub use scroller::FastScroller;
pub use state::ScrollbarSnapshot;
pub use timer::HideTimer;
pub use types::{HandleState, ListExtent, TouchEvent, TouchPhase, TouchResponse, Track};
