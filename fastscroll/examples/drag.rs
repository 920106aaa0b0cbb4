// Example: drive a fast-scroll handle with a simulated drag, then let it hide.
use fastscroll::{FastScrollOptions, FastScroller, ListExtent, TouchEvent, Track};

fn main() {
    // A 1000px track over a 2,400 item grid; touches arrive in window coordinates with a 56px
    // toolbar above the list.
    let opts = FastScrollOptions::new(2_400, Track::new(0.0, 1000.0))
        .with_track_offset(56.0)
        .with_view_heights(48.0, 64.0)
        .with_hide_delay_ms(1000);
    let mut s = FastScroller::new(opts);
    s.set_extent(ListExtent::new(0, 96_000, 1000));

    let mut now_ms = 0u64;
    let r = s.on_touch(TouchEvent::down(700.0, 100.0), now_ms);
    println!("down: {r:?} state={:?}", s.state());

    // Simulate a 60fps drag towards the bottom.
    for step in 0..=20 {
        now_ms += 16;
        let y = 100.0 + step as f32 * 50.0;
        let r = s.on_touch(TouchEvent::moved(700.0, y), now_ms);
        if step % 5 == 0 {
            println!(
                "t={now_ms}ms y={y} scroll_to={:?} handle_top={} bubble_top={}",
                r.scroll_to,
                s.handle_top(),
                s.bubble_top()
            );
        }
    }

    s.on_touch(TouchEvent::up(700.0, 1100.0), now_ms);
    println!(
        "released: state={:?} hide_at={:?}",
        s.state(),
        s.hide_deadline_ms()
    );

    // The adapter's timer loop.
    while !s.tick(now_ms) {
        now_ms += 100;
    }
    println!("hidden at t={now_ms}ms state={:?}", s.state());
}
