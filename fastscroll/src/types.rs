/// The vertical band the handle moves in.
///
/// `top` is expressed in the same coordinate space as raw touch `y` values; `height` is the
/// usable track length in pixels (usually the list's visible height).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub top: f32,
    pub height: f32,
}

impl Track {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Scroll metrics reported by the list widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListExtent {
    /// Current scroll offset.
    pub offset: u64,
    /// Total content size in the scroll axis.
    pub range: u64,
    /// Visible size in the scroll axis.
    pub viewport: u64,
}

impl ListExtent {
    pub fn new(offset: u64, range: u64, viewport: u64) -> Self {
        Self {
            offset,
            range,
            viewport,
        }
    }

    /// Total scrollable distance (`range - viewport`), zero when the content fits.
    pub fn scrollable(&self) -> u64 {
        self.range.saturating_sub(self.viewport)
    }

    pub fn can_scroll(&self) -> bool {
        self.scrollable() > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f32,
    /// Raw `y`, before `track_offset` is applied.
    pub y: f32,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Up, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Cancel, x, y)
    }
}

/// Visibility state of the fast-scroll handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandleState {
    /// Scrollbar and bubble hidden.
    #[default]
    Idle,
    /// A touch is held on the handle. Bubble visible, no hide pending.
    Dragging,
    /// Scrollbar visible with a hide pending (after release or a list scroll).
    Settling,
}

/// Result of feeding a touch event into [`crate::FastScroller::on_touch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchResponse {
    /// Whether the event was handled by the fast scroller (the adapter should stop propagating).
    pub consumed: bool,
    /// List position the adapter should scroll to.
    pub scroll_to: Option<usize>,
}

impl TouchResponse {
    pub(crate) fn ignored() -> Self {
        Self::default()
    }

    pub(crate) fn consumed(scroll_to: Option<usize>) -> Self {
        Self {
            consumed: true,
            scroll_to,
        }
    }
}
