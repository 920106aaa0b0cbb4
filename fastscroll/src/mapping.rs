//! Pure position-mapping functions.
//!
//! Every function here is total: degenerate inputs (zero extents, zero track height, empty
//! lists, NaN coordinates) short-circuit to `0` instead of dividing by zero.

use crate::Track;

/// Returns how far through its scrollable range the list is, in `[0, 1]`.
///
/// `total` is the scrollable extent (content size minus viewport size). When it is zero the
/// content fits on screen and the proportion is `0`.
pub fn compute_proportion(scrolled: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    let p = scrolled as f64 / total as f64;
    p.clamp(0.0, 1.0) as f32
}

/// Maps a scroll proportion to a handle position on a track of `track_height` pixels.
///
/// The result is clamped to `[0, track_height]`, so `0` maps to the top of the track and `1` to
/// the bottom.
pub fn map_proportion_to_handle_y(proportion: f32, track_height: f32) -> f32 {
    if !track_height.is_finite() || track_height <= 0.0 {
        return 0.0;
    }
    let proportion = finite_or_zero(proportion).clamp(0.0, 1.0);
    (proportion * track_height).clamp(0.0, track_height)
}

/// Proportion of the track covered by a touch at `touch_y`, in `[0, 1]`.
pub fn touch_proportion(touch_y: f32, track: Track) -> f32 {
    if !track.height.is_finite() || track.height <= 0.0 {
        return 0.0;
    }
    let p = (touch_y - track.top) / track.height;
    finite_or_zero(p).clamp(0.0, 1.0)
}

/// Converts a raw touch coordinate into a target list index.
///
/// Touches above the track map to `0`, touches below it map to `count - 1`. An empty list or a
/// zero-height track always maps to `0`.
pub fn map_touch_y_to_list_position(
    touch_y: f32,
    track_top: f32,
    track_height: f32,
    count: usize,
) -> usize {
    if count == 0 {
        return 0;
    }
    let p = touch_proportion(touch_y, Track::new(track_top, track_height));
    let last = count - 1;
    // `p` is non-negative, so truncating after adding 0.5 rounds half away from zero
    // (`f64::round` is not available without std).
    let index = (p as f64 * last as f64 + 0.5) as usize;
    index.min(last)
}

/// Top edge of a handle view of `handle_height` centered on `handle_y`.
///
/// The handle stays fully inside the track; if it is taller than the track it is pinned to `0`.
pub fn handle_top(handle_y: f32, handle_height: f32, track_height: f32) -> f32 {
    let handle_height = finite_or_zero(handle_height).max(0.0);
    let max_top = (finite_or_zero(track_height) - handle_height).max(0.0);
    (finite_or_zero(handle_y) - handle_height / 2.0).clamp(0.0, max_top)
}

/// Top edge of the bubble view, vertically centered against the handle.
pub fn bubble_top(handle_top: f32, handle_height: f32, bubble_height: f32) -> f32 {
    let center = finite_or_zero(handle_top) + finite_or_zero(handle_height).max(0.0) / 2.0;
    (center - finite_or_zero(bubble_height).max(0.0) / 2.0).max(0.0)
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}
