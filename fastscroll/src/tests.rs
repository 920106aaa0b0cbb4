use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + (end - start) * unit
    }
}

fn scroller(count: usize, track_height: f32) -> FastScroller {
    FastScroller::new(
        FastScrollOptions::new(count, Track::new(0.0, track_height)).with_hide_delay_ms(500),
    )
}

fn scrollable_extent() -> ListExtent {
    ListExtent::new(0, 5000, 1000)
}

#[test]
fn proportion_is_the_clamped_ratio() {
    let mut rng = Lcg::new(7);
    for _ in 0..2000 {
        let total = rng.gen_range_u64(1, 10_000);
        let scrolled = rng.gen_range_u64(0, 20_000);
        let p = compute_proportion(scrolled, total);
        assert!((0.0..=1.0).contains(&p), "p={p}");
        if scrolled <= total {
            let expected = scrolled as f64 / total as f64;
            assert!((p as f64 - expected).abs() < 1e-6, "p={p} expected={expected}");
        } else {
            assert_eq!(p, 1.0);
        }
    }
}

#[test]
fn proportion_is_zero_without_scrollable_extent() {
    for scrolled in [0u64, 1, 500, u64::MAX] {
        assert_eq!(compute_proportion(scrolled, 0), 0.0);
    }
    // Content shorter than the viewport collapses to a zero extent.
    let extent = ListExtent::new(10, 400, 1000);
    assert_eq!(extent.scrollable(), 0);
    assert!(!extent.can_scroll());
    assert_eq!(compute_proportion(extent.offset, extent.scrollable()), 0.0);
}

#[test]
fn handle_y_is_monotonic_in_proportion() {
    for h in [0.0f32, 1.0, 7.5, 333.3, 1000.0] {
        let mut last = map_proportion_to_handle_y(0.0, h);
        for step in 0..=1000 {
            let y = map_proportion_to_handle_y(step as f32 / 1000.0, h);
            assert!(y >= last, "h={h} step={step} y={y} last={last}");
            assert!((0.0..=h).contains(&y));
            last = y;
        }
    }
}

#[test]
fn handle_y_endpoints_map_to_track_ends() {
    for h in [0.0f32, 1.0, 333.3, 1_000_000.0] {
        assert_eq!(map_proportion_to_handle_y(0.0, h), 0.0);
        assert_eq!(map_proportion_to_handle_y(1.0, h), h);
    }
}

#[test]
fn handle_y_clamps_out_of_range_inputs() {
    assert_eq!(map_proportion_to_handle_y(-0.5, 100.0), 0.0);
    assert_eq!(map_proportion_to_handle_y(1.5, 100.0), 100.0);
    assert_eq!(map_proportion_to_handle_y(f32::NAN, 100.0), 0.0);
    assert_eq!(map_proportion_to_handle_y(0.5, -10.0), 0.0);
    assert_eq!(map_proportion_to_handle_y(0.5, f32::NAN), 0.0);
}

#[test]
fn touch_mapping_clamps_to_list_bounds() {
    assert_eq!(map_touch_y_to_list_position(-50.0, 100.0, 1000.0, 40), 0);
    assert_eq!(map_touch_y_to_list_position(99.0, 100.0, 1000.0, 40), 0);
    assert_eq!(map_touch_y_to_list_position(1100.0, 100.0, 1000.0, 40), 39);
    assert_eq!(map_touch_y_to_list_position(5000.0, 100.0, 1000.0, 40), 39);
}

#[test]
fn touch_at_track_middle_targets_middle_item() {
    assert_eq!(touch_proportion(500.0, Track::new(0.0, 1000.0)), 0.5);
    assert_eq!(map_touch_y_to_list_position(500.0, 0.0, 1000.0, 101), 50);
}

#[test]
fn touch_mapping_rounds_to_nearest() {
    // 0.25 * 9 = 2.25 -> 2, 0.75 * 9 = 6.75 -> 7
    assert_eq!(map_touch_y_to_list_position(250.0, 0.0, 1000.0, 10), 2);
    assert_eq!(map_touch_y_to_list_position(750.0, 0.0, 1000.0, 10), 7);
}

#[test]
fn touch_mapping_degenerate_inputs_yield_zero() {
    for y in [-100.0f32, 0.0, 500.0, 10_000.0] {
        assert_eq!(map_touch_y_to_list_position(y, 0.0, 1000.0, 0), 0);
        assert_eq!(map_touch_y_to_list_position(y, 0.0, 0.0, 50), 0);
    }
    assert_eq!(map_touch_y_to_list_position(f32::NAN, 0.0, 1000.0, 50), 0);
    assert_eq!(map_touch_y_to_list_position(500.0, 0.0, 1000.0, 1), 0);
}

#[test]
fn handle_and_bubble_views_stay_on_track() {
    assert_eq!(handle_top(500.0, 40.0, 1000.0), 480.0);
    assert_eq!(handle_top(0.0, 40.0, 1000.0), 0.0);
    assert_eq!(handle_top(1000.0, 40.0, 1000.0), 960.0);
    // Handle taller than the track is pinned to the top.
    assert_eq!(handle_top(10.0, 80.0, 50.0), 0.0);

    assert_eq!(bubble_top(480.0, 40.0, 60.0), 470.0);
    assert_eq!(bubble_top(0.0, 40.0, 60.0), 0.0);
}

#[test]
fn drag_lifecycle_shows_tracks_and_hides() {
    let mut s = scroller(101, 1000.0);
    s.set_extent(scrollable_extent());
    assert_eq!(s.state(), HandleState::Idle);
    assert!(!s.is_scrollbar_visible());

    let r = s.on_touch(TouchEvent::down(10.0, 500.0), 0);
    assert_eq!(
        r,
        TouchResponse {
            consumed: true,
            scroll_to: Some(50)
        }
    );
    assert_eq!(s.state(), HandleState::Dragging);
    assert!(s.is_scrollbar_visible());
    assert!(s.is_bubble_visible());
    assert_eq!(s.handle_y(), 500.0);

    let r = s.on_touch(TouchEvent::moved(10.0, 1200.0), 16);
    assert_eq!(r.scroll_to, Some(100));
    assert_eq!(s.handle_y(), 1000.0);
    assert_eq!(s.target_index(), Some(100));

    let r = s.on_touch(TouchEvent::up(10.0, 1200.0), 100);
    assert_eq!(
        r,
        TouchResponse {
            consumed: true,
            scroll_to: None
        }
    );
    assert_eq!(s.state(), HandleState::Settling);
    assert!(s.is_scrollbar_visible());
    assert!(!s.is_bubble_visible());
    assert_eq!(s.hide_deadline_ms(), Some(600));

    assert!(!s.tick(599));
    assert!(s.is_scrollbar_visible());
    assert!(s.tick(600));
    assert_eq!(s.state(), HandleState::Idle);
    assert!(!s.is_scrollbar_visible());
    assert!(!s.tick(700));
}

#[test]
fn cancel_behaves_like_release() {
    let mut s = scroller(10, 100.0);
    s.set_extent(scrollable_extent());
    s.on_touch(TouchEvent::down(0.0, 10.0), 0);
    let r = s.on_touch(TouchEvent::cancel(0.0, 10.0), 5);
    assert!(r.consumed);
    assert_eq!(s.state(), HandleState::Settling);
    assert_eq!(s.hide_deadline_ms(), Some(505));
}

#[test]
fn touch_down_cancels_pending_hide() {
    let mut s = scroller(101, 1000.0);
    s.set_extent(scrollable_extent());
    s.on_touch(TouchEvent::down(0.0, 100.0), 0);
    s.on_touch(TouchEvent::up(0.0, 100.0), 100);
    assert_eq!(s.hide_deadline_ms(), Some(600));

    s.on_touch(TouchEvent::down(0.0, 300.0), 300);
    assert_eq!(s.state(), HandleState::Dragging);
    assert!(!s.is_hide_pending());

    // The old deadline passes without hiding.
    assert!(!s.tick(600));
    assert!(s.is_scrollbar_visible());

    s.on_touch(TouchEvent::up(0.0, 300.0), 700);
    assert_eq!(s.hide_deadline_ms(), Some(1200));
    assert!(!s.tick(1199));
    assert!(s.tick(1200));
}

#[test]
fn touch_left_of_handle_is_not_consumed() {
    let mut s = FastScroller::new(
        FastScrollOptions::new(20, Track::new(0.0, 400.0)).with_handle_hit_area(300.0, 20.0),
    );
    s.set_extent(scrollable_extent());

    let r = s.on_touch(TouchEvent::down(279.0, 100.0), 0);
    assert_eq!(r, TouchResponse::default());
    assert_eq!(s.state(), HandleState::Idle);
    assert!(!s.is_bubble_visible());

    let r = s.on_touch(TouchEvent::down(280.0, 100.0), 0);
    assert!(r.consumed);
    assert_eq!(s.state(), HandleState::Dragging);
}

#[test]
fn move_and_release_without_down_are_ignored() {
    let mut s = scroller(10, 100.0);
    assert!(!s.on_touch(TouchEvent::moved(0.0, 50.0), 0).consumed);
    assert!(!s.on_touch(TouchEvent::up(0.0, 50.0), 0).consumed);
    assert!(!s.on_touch(TouchEvent::cancel(0.0, 50.0), 0).consumed);
    assert_eq!(s.state(), HandleState::Idle);
    assert!(!s.is_hide_pending());
}

#[test]
fn unscrollable_list_keeps_scrollbar_hidden_but_drags() {
    let mut s = scroller(5, 100.0);
    s.set_extent(ListExtent::new(0, 80, 100));

    let r = s.on_touch(TouchEvent::down(0.0, 100.0), 0);
    assert_eq!(r.scroll_to, Some(4));
    assert!(!s.is_scrollbar_visible());
    assert!(s.is_bubble_visible());
}

#[test]
fn empty_list_consumes_without_target() {
    let mut s = scroller(0, 100.0);
    let r = s.on_touch(TouchEvent::down(0.0, 50.0), 0);
    assert!(r.consumed);
    assert_eq!(r.scroll_to, None);
    assert_eq!(s.target_index(), None);
    assert_eq!(s.handle_y(), 50.0);
}

#[test]
fn track_offset_is_subtracted_from_raw_touch() {
    let mut s = FastScroller::new(
        FastScrollOptions::new(101, Track::new(0.0, 1000.0)).with_track_offset(56.0),
    );
    let r = s.on_touch(TouchEvent::down(0.0, 556.0), 0);
    assert_eq!(r.scroll_to, Some(50));
    assert_eq!(s.handle_y(), 500.0);
}

#[test]
fn list_scroll_positions_handle_and_schedules_hide() {
    let mut s = scroller(100, 1000.0);
    s.on_list_scroll(ListExtent::new(2000, 5000, 1000), 40);

    assert_eq!(s.proportion(), 0.5);
    assert_eq!(s.handle_y(), 500.0);
    assert_eq!(s.state(), HandleState::Settling);
    assert!(s.is_scrollbar_visible());
    assert!(!s.is_bubble_visible());
    assert_eq!(s.hide_deadline_ms(), Some(540));

    // Another scroll pushes the hide back.
    s.on_list_scroll(ListExtent::new(4000, 5000, 1000), 300);
    assert_eq!(s.handle_y(), 1000.0);
    assert_eq!(s.hide_deadline_ms(), Some(800));
    assert!(!s.tick(540));
    assert!(s.tick(800));
}

#[test]
fn list_scroll_during_drag_does_not_move_handle() {
    let mut s = scroller(101, 1000.0);
    s.set_extent(scrollable_extent());
    s.on_touch(TouchEvent::down(0.0, 250.0), 0);

    s.on_list_scroll(ListExtent::new(3900, 5000, 1000), 10);
    assert_eq!(s.handle_y(), 250.0);
    assert_eq!(s.state(), HandleState::Dragging);
    assert!(!s.is_hide_pending());
    assert_eq!(s.extent().offset, 3900);
}

#[test]
fn list_scroll_without_scrollable_extent_stays_idle() {
    let mut s = scroller(3, 1000.0);
    s.on_list_scroll(ListExtent::new(0, 300, 1000), 0);
    assert_eq!(s.state(), HandleState::Idle);
    assert!(!s.is_scrollbar_visible());
    assert!(!s.is_hide_pending());
}

#[test]
fn list_scroll_after_content_shrinks_resets_handle() {
    let mut s = scroller(100, 1000.0);
    s.on_list_scroll(ListExtent::new(4000, 5000, 1000), 0);
    assert_eq!(s.handle_y(), 1000.0);

    // Content now fits in the viewport.
    s.on_list_scroll(ListExtent::new(0, 800, 1000), 100);
    assert_eq!(s.proportion(), 0.0);
    assert_eq!(s.handle_y(), 0.0);
    assert_eq!(s.extent().range, 800);
}

#[test]
fn set_extent_moves_handle_without_showing() {
    let mut s = scroller(100, 200.0);
    s.set_extent(ListExtent::new(1000, 5000, 1000));
    assert_eq!(s.handle_y(), 50.0);
    assert!(!s.is_scrollbar_visible());
    assert_eq!(s.state(), HandleState::Idle);
}

#[test]
fn hide_now_drops_pending_hide() {
    let mut s = scroller(100, 1000.0);
    s.on_list_scroll(ListExtent::new(100, 5000, 1000), 0);
    s.hide_now();
    assert_eq!(s.state(), HandleState::Idle);
    assert!(!s.is_hide_pending());
    assert!(!s.tick(10_000));
}

#[test]
fn set_item_count_clamps_target() {
    let mut s = scroller(101, 1000.0);
    s.on_touch(TouchEvent::down(0.0, 900.0), 0);
    assert_eq!(s.target_index(), Some(90));
    s.set_item_count(10);
    assert_eq!(s.target_index(), Some(9));
    s.set_item_count(0);
    assert_eq!(s.target_index(), None);
}

#[test]
fn on_change_fires_once_per_update() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let mut s = FastScroller::new(
        FastScrollOptions::new(10, Track::new(0.0, 100.0)).with_on_change(Some(
            move |_: &FastScroller| {
                c.fetch_add(1, Ordering::Relaxed);
            },
        )),
    );

    s.on_touch(TouchEvent::down(0.0, 50.0), 0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // Ignored events do not notify.
    s.on_touch(TouchEvent::down(-1.0, 50.0), 0);
    s.on_touch(TouchEvent::moved(0.0, 60.0), 1);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    s.batch_update(|s| {
        s.set_track(Track::new(0.0, 300.0));
        s.set_item_count(30);
        s.set_extent(scrollable_extent());
    });
    assert_eq!(calls.load(Ordering::Relaxed), 3);

    // Unchanged values are no-ops.
    s.set_track(Track::new(0.0, 300.0));
    s.set_item_count(30);
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn on_change_sees_updated_state() {
    let seen = Arc::new(AtomicUsize::new(usize::MAX));
    let c = Arc::clone(&seen);
    let mut s = scroller(101, 1000.0);
    s.set_on_change(Some(move |s: &FastScroller| {
        c.store(s.target_index().unwrap_or(usize::MAX), Ordering::Relaxed);
    }));
    s.on_touch(TouchEvent::down(0.0, 500.0), 0);
    assert_eq!(seen.load(Ordering::Relaxed), 50);
}

#[test]
fn restore_mid_drag_resumes_settling() {
    let mut a = scroller(101, 1000.0);
    a.set_extent(scrollable_extent());
    a.on_touch(TouchEvent::down(0.0, 500.0), 0);
    let snap = a.snapshot();
    assert_eq!(snap.state, HandleState::Dragging);
    assert!(snap.bubble_visible);

    let mut b = scroller(0, 0.0);
    b.restore(snap, 1000);
    assert_eq!(b.state(), HandleState::Settling);
    assert_eq!(b.handle_y(), 500.0);
    assert_eq!(b.item_count(), 101);
    assert!(b.is_scrollbar_visible());
    assert!(!b.is_bubble_visible());
    assert_eq!(b.hide_deadline_ms(), Some(1500));
}

#[test]
fn restore_settling_keeps_deadline() {
    let mut a = scroller(10, 100.0);
    a.on_list_scroll(ListExtent::new(500, 2000, 1000), 0);
    let snap = a.snapshot();

    let mut b = scroller(10, 100.0);
    b.restore(snap, 200);
    assert_eq!(b.hide_deadline_ms(), Some(500));
    assert_eq!(b.snapshot(), snap);
}

#[test]
fn restore_idle_hides() {
    let mut b = scroller(10, 100.0);
    b.on_list_scroll(ListExtent::new(500, 2000, 1000), 0);
    b.restore(ScrollbarSnapshot::default(), 10);
    assert_eq!(b.state(), HandleState::Idle);
    assert!(!b.is_scrollbar_visible());
    assert!(!b.is_hide_pending());
}

#[test]
fn random_event_sequences_keep_invariants() {
    let mut rng = Lcg::new(0xfa57);
    let mut s = scroller(257, 640.0);
    let mut now_ms = 0u64;
    let mut hides = Vec::new();

    for _ in 0..5000 {
        now_ms += rng.gen_range_u64(0, 200);
        let y = rng.gen_f32(-200.0, 900.0);
        match rng.gen_range_u64(0, 6) {
            0 => {
                s.on_touch(TouchEvent::down(0.0, y), now_ms);
            }
            1 | 2 => {
                s.on_touch(TouchEvent::moved(0.0, y), now_ms);
            }
            3 => {
                s.on_touch(TouchEvent::up(0.0, y), now_ms);
            }
            4 => {
                let offset = rng.gen_range_u64(0, 6000);
                s.on_list_scroll(ListExtent::new(offset, 5000, 1000), now_ms);
            }
            _ => {
                if s.tick(now_ms) {
                    hides.push(now_ms);
                }
            }
        }

        let h = s.handle_y();
        assert!((0.0..=640.0).contains(&h), "handle_y={h}");
        assert!((0.0..=1.0).contains(&s.proportion()));
        assert_eq!(s.is_bubble_visible(), s.is_dragging());
        if s.is_dragging() {
            assert!(!s.is_hide_pending());
        }
        if s.state() == HandleState::Settling {
            assert!(s.is_hide_pending());
        }
        if let Some(t) = s.target_index() {
            assert!(t < 257);
        }
    }
    assert!(!hides.is_empty());
}
