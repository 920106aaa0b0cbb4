use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use fastscroll::{
    FastScrollOptions, FastScroller, ListExtent, TouchEvent, TouchPhase, TouchResponse, Track,
};

use crate::Effect;

/// Produces the bubble text for a list position (e.g. the month/year group of a photo).
pub type SectionLabel = Arc<dyn Fn(usize) -> Option<String> + Send + Sync>;

#[derive(Clone, Copy, PartialEq, Eq)]
struct Visibility {
    scrollbar: bool,
    bubble: bool,
}

impl Visibility {
    fn of(s: &FastScroller) -> Self {
        Self {
            scrollbar: s.is_scrollbar_visible(),
            bubble: s.is_bubble_visible(),
        }
    }
}

/// A framework-neutral controller that wraps a `fastscroll::FastScroller` and turns its state
/// transitions into view [`Effect`]s.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_touch` for touch events on the handle
/// - `on_list_scroll` when the list reports a scroll
/// - `tick(now_ms)` each frame/timer tick (for the delayed hide)
///
/// and then apply the queued effects with `drain_effects`.
///
/// On touch-down the pending hide is canceled before `CancelAnimations` is queued, and both come
/// before any show effect, so a rapid down/up/down never leaves a hide pending or a hide
/// animation running under a visible handle.
#[derive(Clone)]
pub struct Controller {
    s: FastScroller,
    section_label: Option<SectionLabel>,
    bubble_label: Option<String>,
    last_scroll_to: Option<usize>,
    effects: Vec<Effect>,
}

impl Controller {
    pub fn new(options: FastScrollOptions) -> Self {
        Self::from_scroller(FastScroller::new(options))
    }

    pub fn from_scroller(s: FastScroller) -> Self {
        Self {
            s,
            section_label: None,
            bubble_label: None,
            last_scroll_to: None,
            effects: Vec::new(),
        }
    }

    pub fn with_section_label(
        mut self,
        section_label: impl Fn(usize) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.section_label = Some(Arc::new(section_label));
        self
    }

    pub fn set_section_label(
        &mut self,
        section_label: Option<impl Fn(usize) -> Option<String> + Send + Sync + 'static>,
    ) {
        self.section_label = section_label.map(|f| Arc::new(f) as _);
    }

    pub fn scroller(&self) -> &FastScroller {
        &self.s
    }

    pub fn scroller_mut(&mut self) -> &mut FastScroller {
        &mut self.s
    }

    pub fn into_scroller(self) -> FastScroller {
        self.s
    }

    /// Text currently shown in the bubble, if any.
    pub fn bubble_label(&self) -> Option<&str> {
        self.bubble_label.as_deref()
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Hands queued effects to `f` in the order they were produced.
    pub fn drain_effects(&mut self, mut f: impl FnMut(Effect)) {
        for effect in self.effects.drain(..) {
            f(effect);
        }
    }

    /// Updates geometry after a layout pass (one coalesced change notification).
    pub fn on_layout(&mut self, track: Track, item_count: usize, extent: ListExtent) {
        atrace!(
            track_top = track.top,
            track_height = track.height,
            item_count,
            "Controller::on_layout"
        );
        let before = Visibility::of(&self.s);
        self.s.batch_update(|s| {
            s.set_track(track);
            s.set_item_count(item_count);
            s.set_extent(extent);
        });
        self.push_visibility_changes(before);
    }

    /// Feeds a touch event on the handle. Returns whether the event was consumed.
    pub fn on_touch(&mut self, event: TouchEvent, now_ms: u64) -> bool {
        let before = Visibility::of(&self.s);
        let TouchResponse { consumed, scroll_to } = self.s.on_touch(event, now_ms);
        if !consumed {
            return false;
        }

        match event.phase {
            TouchPhase::Down => {
                self.last_scroll_to = None;
                self.effects.push(Effect::CancelAnimations);
                self.effects.push(Effect::DisallowIntercept(true));
                self.push_visibility_changes(before);
            }
            TouchPhase::Move => {}
            TouchPhase::Up | TouchPhase::Cancel => {
                self.effects.push(Effect::DisallowIntercept(false));
                self.push_visibility_changes(before);
                self.bubble_label = None;
            }
        }

        if let Some(index) = scroll_to {
            self.push_scroll_to(index);
        }
        true
    }

    /// Feeds a list scroll event.
    pub fn on_list_scroll(&mut self, extent: ListExtent, now_ms: u64) {
        let before = Visibility::of(&self.s);
        self.s.on_list_scroll(extent, now_ms);
        self.push_visibility_changes(before);
    }

    /// Advances the delayed hide. Returns `true` when the scrollbar was hidden by this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let before = Visibility::of(&self.s);
        let hidden = self.s.tick(now_ms);
        if hidden {
            self.push_visibility_changes(before);
        }
        hidden
    }

    /// Hides the scrollbar and bubble right away (e.g. when the list is detached).
    pub fn hide_now(&mut self) {
        let before = Visibility::of(&self.s);
        self.s.hide_now();
        self.effects.push(Effect::CancelAnimations);
        self.push_visibility_changes(before);
        self.bubble_label = None;
    }

    fn push_scroll_to(&mut self, index: usize) {
        if self.last_scroll_to == Some(index) {
            return;
        }
        self.last_scroll_to = Some(index);
        self.effects.push(Effect::ScrollToPosition(index));

        let Some(section_label) = &self.section_label else {
            return;
        };
        let label = section_label(index);
        if label != self.bubble_label {
            if let Some(text) = &label {
                self.effects.push(Effect::SetBubbleLabel(text.clone()));
            } else {
                awarn!(index, "section label missing for list position");
            }
            self.bubble_label = label;
        }
    }

    fn push_visibility_changes(&mut self, before: Visibility) {
        let after = Visibility::of(&self.s);
        if before == after {
            return;
        }
        adebug!(
            scrollbar = after.scrollbar,
            bubble = after.bubble,
            "visibility changed"
        );
        if before.scrollbar != after.scrollbar {
            self.effects.push(if after.scrollbar {
                Effect::ShowScrollbar
            } else {
                Effect::HideScrollbar
            });
        }
        if before.bubble != after.bubble {
            self.effects.push(if after.bubble {
                Effect::ShowBubble
            } else {
                Effect::HideBubble
            });
        }
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("scroller", &self.s)
            .field("bubble_label", &self.bubble_label)
            .field("last_scroll_to", &self.last_scroll_to)
            .field("effects", &self.effects)
            .finish_non_exhaustive()
    }
}
