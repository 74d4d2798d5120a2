mod script;

use anyhow::Context;
use swipecard_gesture::{
    Direction, ExitPosition, RecenterPosition, SwipeAction, SwipeConfig, SwipeListener,
    SwipeTracker,
};

use script::{card_frame, CARD_HEIGHT, CARD_WIDTH, VIEWPORT_WIDTH};

/// Logs every callback and counts cards that left the deck.
#[derive(Default)]
struct LoggingListener {
    exited: usize,
}

impl SwipeListener for LoggingListener {
    fn on_scroll(&mut self, progress: f32) {
        log::debug!("scroll progress {progress:.3}");
    }

    fn on_click(&mut self) {
        log::info!("card clicked");
    }

    fn on_exit(&mut self, direction: Direction, position: &ExitPosition) {
        self.exited += 1;
        log::info!(
            "card exits {direction:?} towards ({:.1}, {:.1}) rotated {:.1} deg",
            position.x,
            position.y,
            position.rotation_degrees
        );
    }

    fn on_recenter(&mut self, position: &RecenterPosition) {
        log::info!("card returns to ({:.1}, {:.1})", position.x, position.y);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipecard Demo ===");
    println!("Viewport {VIEWPORT_WIDTH} wide, card {CARD_WIDTH}x{CARD_HEIGHT}");
    println!("Set RUST_LOG=debug to see every drag update");
    println!();

    let mut tracker = SwipeTracker::new(SwipeConfig::default(), LoggingListener::default());

    for gesture in script::gestures() {
        // A fresh card replaces one that left; a recentered card keeps its snapshot.
        if tracker.geometry().is_none() {
            tracker
                .begin(card_frame(), VIEWPORT_WIDTH)
                .with_context(|| format!("cannot place card for {}", gesture.name))?;
        }

        log::info!("--- {} ---", gesture.name);
        let mut last = SwipeAction::None;
        for event in &gesture.events {
            let action = tracker.handle(event);
            if action != SwipeAction::None {
                last = action;
            }
        }
        println!("{:<24} {last:?}", gesture.name);
    }

    println!();
    println!("{} card(s) swiped away", tracker.listener().exited);
    Ok(())
}
