use std::cell::Cell;
use std::rc::Rc;

use swipecard_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// A tracker consumes move events once the card is being dragged so that
/// handlers behind the card (e.g. a list scroll) can skip them.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position in the coordinate space of the card's container.
    pub position: Point,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y))
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = PointerEvent::moved(1.0, 2.0);
        let copy = event.clone();
        assert!(!copy.is_consumed());
        event.consume();
        assert!(copy.is_consumed());
    }

    #[test]
    fn constructors_set_kind_and_id() {
        let event = PointerEvent::up(3.0, 4.0).with_id(7);
        assert_eq!(event.kind, PointerEventKind::Up);
        assert_eq!(event.position, Point::new(3.0, 4.0));
        assert_eq!(event.id, 7);
        assert_eq!(PointerEvent::cancel(0.0, 0.0).kind, PointerEventKind::Cancel);
    }
}
