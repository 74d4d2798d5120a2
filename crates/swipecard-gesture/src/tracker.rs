//! Per-card swipe state machine.

use swipecard_core::{
    Direction, ExitPosition, FrameGeometry, GeometryError, RecenterPosition, TouchZone,
    UpdatePosition,
};
use swipecard_graphics::{Point, Rect};

use crate::{PointerEvent, PointerEventKind, PointerId, SwipeConfig};

/// Callbacks fired by a [`SwipeTracker`]. All methods default to no-ops.
pub trait SwipeListener {
    /// Scroll progress in `[-1, 1]` after each drag move.
    fn on_scroll(&mut self, _progress: f32) {}

    /// The card was pressed and released without being dragged.
    fn on_click(&mut self) {}

    fn on_exit(&mut self, _direction: Direction, _position: &ExitPosition) {}

    fn on_recenter(&mut self, _position: &RecenterPosition) {}
}

impl SwipeListener for () {}

/// What the caller should do with the card after an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeAction {
    None,
    /// Move the card to follow the pointer.
    Update(UpdatePosition),
    Click,
    /// Animate the card back to where the drag started.
    Recenter(RecenterPosition),
    /// Animate the card off screen. The tracker forgets the card afterwards.
    Exit {
        direction: Direction,
        position: ExitPosition,
    },
}

#[derive(Debug)]
struct DragSession {
    pointer: PointerId,
    press: Point,
    /// Configured rotation, negated for bottom-half grabs.
    rotation_factor: f32,
    last_update: Option<UpdatePosition>,
}

impl DragSession {
    fn is_dragging(&self) -> bool {
        self.last_update.is_some()
    }
}

/// Turns pointer events on one card into geometry queries.
///
/// Call [`SwipeTracker::begin`] with the card's laid-out frame, then feed
/// every pointer event to [`SwipeTracker::handle`].
pub struct SwipeTracker<L: SwipeListener = ()> {
    config: SwipeConfig,
    listener: L,
    geometry: Option<FrameGeometry>,
    /// Card bounds at rest, used for hit testing presses.
    frame: Option<Rect>,
    session: Option<DragSession>,
}

impl<L: SwipeListener> SwipeTracker<L> {
    pub fn new(config: SwipeConfig, listener: L) -> Self {
        Self {
            config,
            listener,
            geometry: None,
            frame: None,
            session: None,
        }
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    pub fn geometry(&self) -> Option<&FrameGeometry> {
        self.geometry.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::is_dragging)
    }

    /// Snapshots the card at `frame` inside a container `parent_width` wide.
    ///
    /// The frame must be measured without any drag transform applied. Calls
    /// made while a drag is in progress are ignored.
    pub fn begin(&mut self, frame: Rect, parent_width: f32) -> Result<(), GeometryError> {
        if self.is_dragging() {
            log::warn!("ignoring swipe begin while a drag is in progress");
            return Ok(());
        }
        let geometry = FrameGeometry::from_rect(frame, parent_width)?;
        log::debug!(
            "swipe begin: frame {frame:?}, neutral zone {}..{}",
            geometry.left_border(),
            geometry.right_border()
        );
        self.geometry = Some(geometry);
        self.frame = Some(frame);
        self.session = None;
        Ok(())
    }

    pub fn handle(&mut self, event: &PointerEvent) -> SwipeAction {
        let Some(geometry) = self.geometry else {
            log::trace!("no card snapshot, ignoring {:?}", event.kind);
            return SwipeAction::None;
        };

        match event.kind {
            PointerEventKind::Down => {
                self.press(&geometry, event);
                SwipeAction::None
            }
            PointerEventKind::Move => self.drag(&geometry, event),
            PointerEventKind::Up => match self.take_session(event.id) {
                Some(session) if session.is_dragging() => self.release(&geometry, &session),
                Some(_) => {
                    log::debug!("swipe click");
                    self.listener.on_click();
                    SwipeAction::Click
                }
                None => SwipeAction::None,
            },
            PointerEventKind::Cancel => match self.take_session(event.id) {
                Some(session) if session.is_dragging() => self.recenter(&geometry),
                _ => SwipeAction::None,
            },
        }
    }

    fn press(&mut self, geometry: &FrameGeometry, event: &PointerEvent) {
        if self.session.is_some() {
            log::trace!("pointer {} down during active session, ignoring", event.id);
            return;
        }
        let position = event.position;
        if !self.frame.is_some_and(|frame| frame.contains(position.x, position.y)) {
            log::trace!("pointer {} down outside the card, ignoring", event.id);
            return;
        }
        let zone = geometry.classify_touch(event.position.y - geometry.start_y());
        let rotation_factor = match zone {
            TouchZone::Top => self.config.rotation_degrees,
            TouchZone::Bottom => -self.config.rotation_degrees,
        };
        log::trace!("pointer {} down in {zone:?} half", event.id);
        self.session = Some(DragSession {
            pointer: event.id,
            press: event.position,
            rotation_factor,
            last_update: None,
        });
    }

    fn drag(&mut self, geometry: &FrameGeometry, event: &PointerEvent) -> SwipeAction {
        let threshold = self.config.drag_threshold_px();
        let Some(session) = self.session.as_mut().filter(|s| s.pointer == event.id) else {
            return SwipeAction::None;
        };
        if !session.is_dragging() && session.press.distance_to(event.position) <= threshold {
            return SwipeAction::None;
        }

        let delta = event.position - session.press;
        let update = geometry.compute_update(delta.x, delta.y, session.rotation_factor);
        session.last_update = Some(update);
        event.consume();

        log::trace!(
            "drag to ({}, {}), rotation {}, progress {}",
            update.x,
            update.y,
            update.rotation_degrees,
            update.scroll_progress
        );
        self.listener.on_scroll(update.scroll_progress);
        SwipeAction::Update(update)
    }

    fn release(&mut self, geometry: &FrameGeometry, session: &DragSession) -> SwipeAction {
        let Some(update) = session.last_update else {
            return self.recenter(geometry);
        };
        let Some(direction) = Direction::from_scroll_progress(update.scroll_progress) else {
            return self.recenter(geometry);
        };

        let current = Point::new(update.x, update.y);
        match geometry.exit_position(current, direction, session.rotation_factor) {
            Ok(position) => {
                log::debug!("swipe exit {direction:?} to ({}, {})", position.x, position.y);
                self.listener.on_exit(direction, &position);
                self.geometry = None;
                self.frame = None;
                SwipeAction::Exit {
                    direction,
                    position,
                }
            }
            Err(err) => {
                log::warn!("cannot exit {direction:?}: {err}");
                self.recenter(geometry)
            }
        }
    }

    fn recenter(&mut self, geometry: &FrameGeometry) -> SwipeAction {
        let position = geometry.recenter_position();
        log::debug!("swipe recenter to ({}, {})", position.x, position.y);
        self.listener.on_recenter(&position);
        SwipeAction::Recenter(position)
    }

    /// Ends the session if `pointer` owns it.
    fn take_session(&mut self, pointer: PointerId) -> Option<DragSession> {
        match &self.session {
            Some(session) if session.pointer == pointer => self.session.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
