use swipecard_gesture::{
    Direction, ExitPosition, PointerEvent, Rect, RecenterPosition, SwipeAction, SwipeConfig,
    SwipeListener, SwipeTracker,
};

const PARENT_WIDTH: f32 = 720.0;

#[derive(Debug, PartialEq)]
enum Event {
    Click,
    Exit(Direction),
    Recenter,
}

#[derive(Default)]
struct Deck {
    events: Vec<Event>,
    max_progress: f32,
}

impl SwipeListener for Deck {
    fn on_scroll(&mut self, progress: f32) {
        self.max_progress = self.max_progress.max(progress.abs());
    }

    fn on_click(&mut self) {
        self.events.push(Event::Click);
    }

    fn on_exit(&mut self, direction: Direction, _position: &ExitPosition) {
        self.events.push(Event::Exit(direction));
    }

    fn on_recenter(&mut self, _position: &RecenterPosition) {
        self.events.push(Event::Recenter);
    }
}

fn card() -> Rect {
    Rect {
        x: 60.0,
        y: 120.0,
        width: 600.0,
        height: 800.0,
    }
}

fn drag(tracker: &mut SwipeTracker<Deck>, from: (f32, f32), to: (f32, f32)) -> SwipeAction {
    tracker.handle(&PointerEvent::down(from.0, from.1));
    let steps = 8;
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        tracker.handle(&PointerEvent::moved(x, y));
    }
    tracker.handle(&PointerEvent::up(to.0, to.1))
}

#[test]
fn deck_of_cards_session() {
    let mut tracker = SwipeTracker::new(SwipeConfig::default(), Deck::default());

    tracker.begin(card(), PARENT_WIDTH).expect("first card");
    assert_eq!(
        tracker.handle(&PointerEvent::down(360.0, 300.0)),
        SwipeAction::None
    );
    assert_eq!(
        tracker.handle(&PointerEvent::up(361.0, 300.0)),
        SwipeAction::Click
    );

    // Not far enough to leave the neutral zone.
    let action = drag(&mut tracker, (360.0, 300.0), (420.0, 310.0));
    assert!(matches!(action, SwipeAction::Recenter(_)));

    let action = drag(&mut tracker, (360.0, 300.0), (700.0, 380.0));
    assert!(matches!(
        action,
        SwipeAction::Exit {
            direction: Direction::Right,
            ..
        }
    ));

    // Next card in the stack.
    tracker.begin(card(), PARENT_WIDTH).expect("second card");
    let action = drag(&mut tracker, (360.0, 800.0), (20.0, 760.0));
    assert!(matches!(
        action,
        SwipeAction::Exit {
            direction: Direction::Left,
            ..
        }
    ));

    let deck = tracker.into_listener();
    assert_eq!(
        deck.events,
        vec![
            Event::Click,
            Event::Recenter,
            Event::Exit(Direction::Right),
            Event::Exit(Direction::Left),
        ]
    );
    assert_eq!(deck.max_progress, 1.0);
}

#[test]
fn progress_reported_while_dragging_stays_in_range() {
    #[derive(Default)]
    struct Progress(Vec<f32>);

    impl SwipeListener for Progress {
        fn on_scroll(&mut self, progress: f32) {
            self.0.push(progress);
        }
    }

    let mut tracker = SwipeTracker::new(SwipeConfig::default(), Progress::default());
    tracker.begin(card(), PARENT_WIDTH).expect("card");
    tracker.handle(&PointerEvent::down(360.0, 300.0));
    for x in (0..=72).map(|step| step as f32 * 10.0) {
        tracker.handle(&PointerEvent::moved(x, 300.0));
    }
    tracker.handle(&PointerEvent::cancel(720.0, 300.0));

    let progress = &tracker.listener().0;
    assert!(!progress.is_empty());
    assert!(progress.iter().all(|p| (-1.0..=1.0).contains(p)));
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
}
