use crate::{HandleState, ListExtent, Track};

/// A lightweight, serializable snapshot of the fast scroller.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Restoring a snapshot
/// taken while `Dragging` lands in `Settling`: the touch that started the drag belongs to the
/// previous session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarSnapshot {
    pub state: HandleState,
    pub handle_y: f32,
    pub scrollbar_visible: bool,
    pub bubble_visible: bool,
    pub hide_deadline_ms: Option<u64>,
    pub track: Track,
    pub extent: ListExtent,
    pub item_count: usize,
}
