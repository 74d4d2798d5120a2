//! Scripted gestures replayed by the demo.

use swipecard_gesture::{Point, PointerEvent, Rect, Size};

pub const VIEWPORT_WIDTH: f32 = 1080.0;
pub const CARD_WIDTH: f32 = 900.0;
pub const CARD_HEIGHT: f32 = 1400.0;
const CARD_TOP: f32 = 200.0;

const MOVE_STEPS: usize = 12;

/// Card laid out centered horizontally in the viewport.
pub fn card_frame() -> Rect {
    Rect::from_origin_size(
        Point::new((VIEWPORT_WIDTH - CARD_WIDTH) / 2.0, CARD_TOP),
        Size::new(CARD_WIDTH, CARD_HEIGHT),
    )
}

pub struct Gesture {
    pub name: &'static str,
    pub events: Vec<PointerEvent>,
}

impl Gesture {
    fn tap(name: &'static str, at: Point) -> Self {
        Self {
            name,
            events: vec![PointerEvent::down(at.x, at.y), PointerEvent::up(at.x, at.y)],
        }
    }

    /// Press at `from`, move in even steps to `to`, then release or cancel.
    fn drag(name: &'static str, from: Point, to: Point, cancel: bool) -> Self {
        let mut events = vec![PointerEvent::down(from.x, from.y)];
        for step in 1..=MOVE_STEPS {
            let t = step as f32 / MOVE_STEPS as f32;
            events.push(PointerEvent::moved(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            ));
        }
        events.push(if cancel {
            PointerEvent::cancel(to.x, to.y)
        } else {
            PointerEvent::up(to.x, to.y)
        });
        Self { name, events }
    }
}

pub fn gestures() -> Vec<Gesture> {
    let middle = card_frame().center();
    let center = middle.x;
    let top = Point::new(center, middle.y - CARD_HEIGHT * 0.3);
    let bottom = Point::new(center, middle.y + CARD_HEIGHT * 0.3);

    vec![
        Gesture::tap("tap", top),
        Gesture::drag("short drag", top, Point::new(center + 120.0, top.y + 30.0), false),
        Gesture::drag("vertical drag", top, Point::new(center, top.y + 300.0), false),
        Gesture::drag("cancelled drag", top, Point::new(center + 400.0, top.y), true),
        Gesture::drag("swipe right", top, Point::new(center + 420.0, top.y + 90.0), false),
        Gesture::drag(
            "swipe left from bottom",
            bottom,
            Point::new(center - 450.0, bottom.y - 60.0),
            false,
        ),
    ]
}
