// Example: a simulated gallery grid adapter applying controller effects.
use fastscroll::{FastScrollOptions, ListExtent, TouchEvent, Track};
use fastscroll_adapter::{Controller, Effect, Selection, SelectionChange};

fn main() {
    // 1,200 photos, 40 per month.
    let mut c = Controller::new(FastScrollOptions::new(1_200, Track::new(0.0, 800.0)))
        .with_section_label(|i| Some(format!("month -{}", i / 40)));
    c.on_layout(
        Track::new(0.0, 800.0),
        1_200,
        ListExtent::new(0, 120_000, 800),
    );

    let apply = |c: &mut Controller| {
        c.drain_effects(|e| match e {
            Effect::ScrollToPosition(i) => println!("  list.scroll_to_position({i})"),
            Effect::SetBubbleLabel(text) => println!("  bubble.text = {text:?}"),
            other => println!("  {other:?}"),
        });
    };

    println!("fling:");
    c.on_list_scroll(ListExtent::new(30_000, 120_000, 800), 0);
    apply(&mut c);

    println!("drag:");
    c.on_touch(TouchEvent::down(0.0, 200.0), 100);
    apply(&mut c);
    c.on_touch(TouchEvent::moved(0.0, 640.0), 116);
    apply(&mut c);
    c.on_touch(TouchEvent::up(0.0, 640.0), 132);
    apply(&mut c);

    println!("idle:");
    c.tick(2_000);
    apply(&mut c);

    // Picking from the grid.
    let mut sel = Selection::new(3).with_preselected(["content://media/7"]);
    sel.click("content://media/9");
    sel.click("content://media/11");
    if let SelectionChange::LimitReached = sel.click("content://media/12") {
        println!("selection limit of {} reached", sel.max());
    }
    let mut results = sel.finish();
    results.deliver_to(|r| println!("results: {r:?}"));
    // A second observer sees nothing.
    assert!(!results.deliver_to(|_| unreachable!()));
}
