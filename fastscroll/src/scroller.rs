use alloc::sync::Arc;
use core::cell::Cell;

use crate::mapping;
use crate::{
    FastScrollOptions, HandleState, HideTimer, ListExtent, ScrollbarSnapshot, TouchEvent,
    TouchPhase, TouchResponse, Track,
};

/// A headless fast-scroll handle.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with touch events, list scroll metrics and a monotonic `now_ms`.
/// - It reports where the handle and bubble go, whether they are visible, and which list
///   position a drag targets.
///
/// The delayed hide is a [`HideTimer`] polled by [`FastScroller::tick`]; call it from your
/// frame/timer loop.
#[derive(Clone, Debug)]
pub struct FastScroller {
    options: FastScrollOptions,
    state: HandleState,
    proportion: f32,
    extent: ListExtent,
    scrollbar_visible: bool,
    bubble_visible: bool,
    target_index: Option<usize>,
    hide_timer: HideTimer,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl FastScroller {
    pub fn new(options: FastScrollOptions) -> Self {
        fdebug!(
            item_count = options.item_count,
            track_height = options.track.height,
            hide_delay_ms = options.hide_delay_ms,
            "FastScroller::new"
        );
        Self {
            options,
            state: HandleState::Idle,
            proportion: 0.0,
            extent: ListExtent::default(),
            scrollbar_visible: false,
            bubble_visible: false,
            target_index: None,
            hide_timer: HideTimer::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &FastScrollOptions {
        &self.options
    }

    /// Replaces the options. Visibility and the pending hide are kept.
    pub fn set_options(&mut self, options: FastScrollOptions) {
        self.options = options;
        ftrace!(
            item_count = self.options.item_count,
            track_height = self.options.track.height,
            "FastScroller::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut FastScrollOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&FastScroller) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Useful when a layout pass changes the track, the item count and the list extent together.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == HandleState::Dragging
    }

    pub fn is_scrollbar_visible(&self) -> bool {
        self.scrollbar_visible
    }

    pub fn is_bubble_visible(&self) -> bool {
        self.bubble_visible
    }

    pub fn is_hide_pending(&self) -> bool {
        self.hide_timer.is_pending()
    }

    pub fn hide_deadline_ms(&self) -> Option<u64> {
        self.hide_timer.deadline_ms()
    }

    pub fn track(&self) -> Track {
        self.options.track
    }

    pub fn set_track(&mut self, track: Track) {
        if self.options.track == track {
            return;
        }
        self.options.track = track;
        self.notify();
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if self.options.item_count == item_count {
            return;
        }
        self.options.item_count = item_count;
        if let Some(target) = self.target_index {
            self.target_index = item_count.checked_sub(1).map(|last| target.min(last));
        }
        self.notify();
    }

    pub fn extent(&self) -> ListExtent {
        self.extent
    }

    /// Records new list metrics without treating them as a user scroll (e.g. after layout).
    ///
    /// Outside of a drag the handle follows the new offset.
    pub fn set_extent(&mut self, extent: ListExtent) {
        if self.extent == extent {
            return;
        }
        self.extent = extent;
        if !self.is_dragging() {
            self.proportion = mapping::compute_proportion(extent.offset, extent.scrollable());
        }
        self.notify();
    }

    /// Current scroll proportion in `[0, 1]`.
    pub fn proportion(&self) -> f32 {
        self.proportion
    }

    /// Handle position on the track, in `[0, track.height]`.
    pub fn handle_y(&self) -> f32 {
        mapping::map_proportion_to_handle_y(self.proportion, self.options.track.height)
    }

    /// Top edge of the handle view, relative to the track.
    pub fn handle_top(&self) -> f32 {
        mapping::handle_top(
            self.handle_y(),
            self.options.handle_height,
            self.options.track.height,
        )
    }

    /// Top edge of the bubble view, relative to the track.
    pub fn bubble_top(&self) -> f32 {
        mapping::bubble_top(
            self.handle_top(),
            self.options.handle_height,
            self.options.bubble_height,
        )
    }

    /// The list position targeted by the current (or last) drag.
    pub fn target_index(&self) -> Option<usize> {
        self.target_index
    }

    /// Feeds a touch event received on the handle.
    ///
    /// While dragging, the returned `scroll_to` is the list position the adapter should jump to.
    pub fn on_touch(&mut self, event: TouchEvent, now_ms: u64) -> TouchResponse {
        ftrace!(phase = ?event.phase, x = event.x, y = event.y, now_ms, "on_touch");
        let response = match event.phase {
            TouchPhase::Down => self.touch_down(event),
            TouchPhase::Move => self.touch_move(event),
            TouchPhase::Up | TouchPhase::Cancel => self.touch_release(now_ms),
        };
        if response.consumed {
            self.notify();
        }
        response
    }

    fn touch_down(&mut self, event: TouchEvent) -> TouchResponse {
        if event.x < self.options.hit_left() {
            ftrace!(
                x = event.x,
                hit_left = self.options.hit_left(),
                "touch-down outside the handle"
            );
            return TouchResponse::ignored();
        }

        if self.hide_timer.cancel() {
            fdebug!("touch-down canceled pending hide");
        }
        self.state = HandleState::Dragging;
        if !self.scrollbar_visible && self.extent.can_scroll() {
            self.scrollbar_visible = true;
        }
        self.bubble_visible = true;
        TouchResponse::consumed(self.track_touch(event.y))
    }

    fn touch_move(&mut self, event: TouchEvent) -> TouchResponse {
        if !self.is_dragging() {
            fwarn!(y = event.y, state = ?self.state, "touch-move without a touch-down");
            return TouchResponse::ignored();
        }
        TouchResponse::consumed(self.track_touch(event.y))
    }

    fn touch_release(&mut self, now_ms: u64) -> TouchResponse {
        if !self.is_dragging() {
            fwarn!(state = ?self.state, "touch release without a touch-down");
            return TouchResponse::ignored();
        }
        self.state = HandleState::Settling;
        self.bubble_visible = false;
        self.hide_timer.schedule(now_ms, self.options.hide_delay_ms);
        TouchResponse::consumed(None)
    }

    fn track_touch(&mut self, raw_y: f32) -> Option<usize> {
        let y = raw_y - self.options.track_offset;
        let track = self.options.track;
        self.proportion = mapping::touch_proportion(y, track);
        if self.options.item_count == 0 {
            self.target_index = None;
            return None;
        }
        let index = mapping::map_touch_y_to_list_position(
            y,
            track.top,
            track.height,
            self.options.item_count,
        );
        self.target_index = Some(index);
        Some(index)
    }

    /// Feeds a list scroll event.
    ///
    /// Outside of a drag this shows the scrollbar, moves the handle to the list's proportion and
    /// (re)schedules the hide. During a drag the touch owns the handle and only the metrics are
    /// recorded.
    pub fn on_list_scroll(&mut self, extent: ListExtent, now_ms: u64) {
        ftrace!(
            offset = extent.offset,
            range = extent.range,
            viewport = extent.viewport,
            now_ms,
            "on_list_scroll"
        );
        self.extent = extent;
        if self.is_dragging() {
            self.notify();
            return;
        }
        self.proportion = mapping::compute_proportion(extent.offset, extent.scrollable());
        if !extent.can_scroll() {
            self.notify();
            return;
        }
        self.scrollbar_visible = true;
        self.state = HandleState::Settling;
        self.hide_timer.schedule(now_ms, self.options.hide_delay_ms);
        self.notify();
    }

    /// Advances the hide timer. Returns `true` when the scrollbar was hidden by this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        debug_assert!(
            !(self.is_dragging() && self.hide_timer.is_pending()),
            "hide must not be pending while dragging"
        );
        debug_assert_eq!(
            self.bubble_visible,
            self.is_dragging(),
            "bubble visible only while dragging"
        );
        if !self.hide_timer.poll(now_ms) {
            return false;
        }
        fdebug!(now_ms, "scrollbar hidden");
        self.hide_now();
        true
    }

    /// Hides everything immediately and drops any pending hide.
    pub fn hide_now(&mut self) {
        self.hide_timer.cancel();
        self.state = HandleState::Idle;
        self.scrollbar_visible = false;
        self.bubble_visible = false;
        self.notify();
    }

    pub fn snapshot(&self) -> ScrollbarSnapshot {
        ScrollbarSnapshot {
            state: self.state,
            handle_y: self.handle_y(),
            scrollbar_visible: self.scrollbar_visible,
            bubble_visible: self.bubble_visible,
            hide_deadline_ms: self.hide_timer.deadline_ms(),
            track: self.options.track,
            extent: self.extent,
            item_count: self.options.item_count,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// A snapshot taken mid-drag resumes as `Settling` with a fresh hide scheduled at `now_ms`.
    pub fn restore(&mut self, snapshot: ScrollbarSnapshot, now_ms: u64) {
        self.batch_update(|s| {
            s.options.track = snapshot.track;
            s.options.item_count = snapshot.item_count;
            s.extent = snapshot.extent;
            s.proportion = mapping::touch_proportion(
                snapshot.handle_y,
                Track::new(0.0, snapshot.track.height),
            );
            s.target_index = None;
            s.scrollbar_visible = snapshot.scrollbar_visible;
            s.bubble_visible = false;
            match snapshot.state {
                HandleState::Idle => {
                    s.state = HandleState::Idle;
                    s.scrollbar_visible = false;
                    s.hide_timer.cancel();
                }
                HandleState::Settling => {
                    s.state = HandleState::Settling;
                    s.hide_timer = HideTimer::restore(snapshot.hide_deadline_ms);
                    if !s.hide_timer.is_pending() {
                        s.hide_timer.schedule(now_ms, s.options.hide_delay_ms);
                    }
                }
                HandleState::Dragging => {
                    s.state = HandleState::Settling;
                    s.hide_timer.schedule(now_ms, s.options.hide_delay_ms);
                }
            }
            s.notify();
        });
    }
}
