use alloc::sync::Arc;

use crate::Track;
use crate::scroller::FastScroller;

/// A callback fired when the fast scroller's observable state changes.
pub type OnChangeCallback = Arc<dyn Fn(&FastScroller) + Send + Sync>;

/// Default delay before the scrollbar hides after a release or a list scroll.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 1000;

/// Configuration for [`crate::FastScroller`].
///
/// Cheap to clone: the change callback is stored in an `Arc`.
pub struct FastScrollOptions {
    /// Delay between release (or the last list scroll) and hiding the scrollbar.
    pub hide_delay_ms: u64,

    /// The track the handle moves in, in touch coordinates (after `track_offset`).
    pub track: Track,

    /// Subtracted from raw touch `y` before positioning the handle (e.g. a toolbar above the
    /// list that is part of the touch coordinate space but not of the track).
    pub track_offset: f32,

    pub handle_height: f32,
    pub bubble_height: f32,

    /// Left edge of the handle view. Touch-downs left of
    /// `handle_left - handle_padding_start` are not consumed.
    pub handle_left: f32,
    pub handle_padding_start: f32,

    /// Number of items in the list driven by the handle.
    pub item_count: usize,

    /// Optional callback fired once per coalesced state update.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for FastScrollOptions {
    fn clone(&self) -> Self {
        Self {
            hide_delay_ms: self.hide_delay_ms,
            track: self.track,
            track_offset: self.track_offset,
            handle_height: self.handle_height,
            bubble_height: self.bubble_height,
            handle_left: self.handle_left,
            handle_padding_start: self.handle_padding_start,
            item_count: self.item_count,
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for FastScrollOptions {
    fn default() -> Self {
        Self::new(0, Track::default())
    }
}

impl FastScrollOptions {
    pub fn new(item_count: usize, track: Track) -> Self {
        Self {
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            track,
            track_offset: 0.0,
            handle_height: 0.0,
            bubble_height: 0.0,
            handle_left: 0.0,
            handle_padding_start: 0.0,
            item_count,
            on_change: None,
        }
    }

    pub fn with_hide_delay_ms(mut self, hide_delay_ms: u64) -> Self {
        self.hide_delay_ms = hide_delay_ms;
        self
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    pub fn with_track_offset(mut self, track_offset: f32) -> Self {
        self.track_offset = track_offset;
        self
    }

    /// Sets the handle and bubble view heights used by `handle_top`/`bubble_top`.
    pub fn with_view_heights(mut self, handle_height: f32, bubble_height: f32) -> Self {
        self.handle_height = handle_height;
        self.bubble_height = bubble_height;
        self
    }

    /// Sets the handle's hit area (its left edge and start padding).
    pub fn with_handle_hit_area(mut self, handle_left: f32, handle_padding_start: f32) -> Self {
        self.handle_left = handle_left;
        self.handle_padding_start = handle_padding_start;
        self
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&FastScroller) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Leftmost `x` at which a touch-down still grabs the handle.
    pub fn hit_left(&self) -> f32 {
        self.handle_left - self.handle_padding_start
    }
}

impl core::fmt::Debug for FastScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FastScrollOptions")
            .field("hide_delay_ms", &self.hide_delay_ms)
            .field("track", &self.track)
            .field("track_offset", &self.track_offset)
            .field("handle_height", &self.handle_height)
            .field("bubble_height", &self.bubble_height)
            .field("handle_left", &self.handle_left)
            .field("handle_padding_start", &self.handle_padding_start)
            .field("item_count", &self.item_count)
            .finish_non_exhaustive()
    }
}
