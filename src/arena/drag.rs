//! Drag session tracking for the astronaut's pipe.

use super::geometry::{Bounds, Point, Region, Rope};
use super::target::{DockTicket, DropTarget};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub is_active: bool,
    pub current_position: Point,
    pub origin_position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Accepted(DockTicket),
    Rejected,
}

#[derive(Debug, Clone)]
pub struct DragTracker {
    session: DragSession,
    bounds: Bounds,
    connection: Point,
    pipe_radius: f64,
}

impl DragTracker {
    pub fn new(bounds: Bounds, origin: Point, connection: Point, pipe_radius: f64) -> Self {
        Self {
            session: DragSession {
                is_active: false,
                current_position: origin,
                origin_position: origin,
            },
            bounds,
            connection,
            pipe_radius,
        }
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active
    }

    pub fn position(&self) -> Point {
        self.session.current_position
    }

    pub fn connection(&self) -> Point {
        self.connection
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn rope(&self) -> Rope {
        Rope::between(self.connection, self.session.current_position)
    }

    /// Hit box of the pipe end, widened to at least `min_half` on each axis
    /// so it stays clickable on coarse terminal cells.
    pub fn pipe_region(&self, min_half: (f64, f64)) -> Region {
        Region::around(
            self.session.current_position,
            self.pipe_radius.max(min_half.0),
            self.pipe_radius.max(min_half.1),
        )
    }

    /// Start a session if `point` lies over the pipe.
    pub fn begin(&mut self, point: Point, min_half: (f64, f64)) -> bool {
        if self.session.is_active || !self.pipe_region(min_half).contains(point) {
            return false;
        }
        self.session.is_active = true;
        tracing::debug!(x = point.x, y = point.y, "drag started");
        true
    }

    /// Start a session without a pointer, at the pipe's current position.
    pub fn pick_up(&mut self) -> bool {
        if self.session.is_active {
            return false;
        }
        self.session.is_active = true;
        true
    }

    pub fn move_to(&mut self, point: Point) {
        if self.session.is_active {
            self.session.current_position = self.bounds.clamp(point);
        }
    }

    /// End the session at `release`. Returns `None` when no session was active.
    pub fn end(&mut self, release: Point, targets: &mut [DropTarget], tick: u64) -> Option<DropOutcome> {
        if !self.session.is_active {
            return None;
        }
        self.session.is_active = false;

        let ticket = targets
            .iter_mut()
            .find(|t| t.contains(release))
            .and_then(|t| t.accept(tick));

        match ticket {
            Some(ticket) => {
                self.session.current_position = self.bounds.clamp(release);
                Some(DropOutcome::Accepted(ticket))
            }
            None => {
                tracing::debug!(x = release.x, y = release.y, "drop rejected");
                self.reset_to_origin();
                Some(DropOutcome::Rejected)
            }
        }
    }

    /// Abandon an active session.
    pub fn cancel(&mut self) {
        if self.session.is_active {
            self.session.is_active = false;
            self.reset_to_origin();
        }
    }

    pub fn reset_to_origin(&mut self) {
        self.session.current_position = self.session.origin_position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::nav::Area;
    use crate::arena::target::DockPhase;

    const NO_MIN: (f64, f64) = (0.0, 0.0);

    fn tracker() -> DragTracker {
        DragTracker::new(Bounds::default(), Point::new(96.0, 48.0), Point::new(64.0, 64.0), 16.0)
    }

    fn targets() -> Vec<DropTarget> {
        vec![
            DropTarget::new(Area::Lunar, "Lunar Area", Region::new(240.0, 200.0, 140.0, 90.0)),
            DropTarget::new(Area::Mars, "Mars Area", Region::new(20.0, 200.0, 140.0, 90.0)),
        ]
    }

    #[test]
    fn test_begin_requires_pointer_over_pipe() {
        let mut t = tracker();
        assert!(!t.begin(Point::new(200.0, 200.0), NO_MIN));
        assert!(!t.is_active());
        assert!(t.begin(Point::new(100.0, 50.0), NO_MIN));
        assert!(t.is_active());
        assert!(!t.begin(Point::new(96.0, 48.0), NO_MIN));
    }

    #[test]
    fn test_min_half_widens_hit_box() {
        let mut t = tracker();
        assert!(!t.begin(Point::new(96.0, 70.0), NO_MIN));
        assert!(t.begin(Point::new(96.0, 70.0), (4.0, 25.0)));
    }

    #[test]
    fn test_move_clamps_to_bounds() {
        let mut t = tracker();
        t.begin(Point::new(96.0, 48.0), NO_MIN);
        t.move_to(Point::new(-20.0, 999.0));
        assert_eq!(t.position(), Point::new(0.0, 300.0));
        t.move_to(Point::new(500.0, -1.0));
        assert_eq!(t.position(), Point::new(400.0, 0.0));
    }

    #[test]
    fn test_move_ignored_when_inactive() {
        let mut t = tracker();
        t.move_to(Point::new(200.0, 200.0));
        assert_eq!(t.position(), Point::new(96.0, 48.0));
    }

    #[test]
    fn test_rope_follows_position() {
        let mut t = tracker();
        t.begin(Point::new(96.0, 48.0), NO_MIN);
        t.move_to(Point::new(164.0, 64.0));
        let rope = t.rope();
        assert!((rope.length - 100.0).abs() < 1e-9);
        assert!(rope.angle_degrees.abs() < 1e-9);
    }

    #[test]
    fn test_drop_outside_resets_to_origin() {
        let mut t = tracker();
        let mut ts = targets();
        t.begin(Point::new(96.0, 48.0), NO_MIN);
        t.move_to(Point::new(10.0, 10.0));
        assert_eq!(t.end(Point::new(10.0, 10.0), &mut ts, 0), Some(DropOutcome::Rejected));
        assert_eq!(t.position(), Point::new(96.0, 48.0));
        assert!(!t.is_active());
        assert!(ts.iter().all(|t| t.is_idle()));
    }

    #[test]
    fn test_drop_inside_accepts_that_target_only() {
        let mut t = tracker();
        let mut ts = targets();
        t.begin(Point::new(96.0, 48.0), NO_MIN);
        t.move_to(Point::new(300.0, 250.0));
        let outcome = t.end(Point::new(300.0, 250.0), &mut ts, 0);
        match outcome {
            Some(DropOutcome::Accepted(ticket)) => assert_eq!(ticket.area, Area::Lunar),
            other => panic!("expected accepted drop, got {:?}", other),
        }
        assert_eq!(ts[0].phase(), DockPhase::Connected);
        assert!(ts[1].is_idle());
        assert_eq!(t.position(), Point::new(300.0, 250.0));
    }

    #[test]
    fn test_end_without_session() {
        let mut t = tracker();
        let mut ts = targets();
        assert_eq!(t.end(Point::new(300.0, 250.0), &mut ts, 0), None);
        assert!(ts[0].is_idle());
    }

    #[test]
    fn test_rejected_session_can_restart() {
        let mut t = tracker();
        let mut ts = targets();
        t.begin(Point::new(96.0, 48.0), NO_MIN);
        t.end(Point::new(10.0, 10.0), &mut ts, 0);
        assert!(t.begin(Point::new(96.0, 48.0), NO_MIN));
    }

    #[test]
    fn test_cancel() {
        let mut t = tracker();
        t.pick_up();
        t.move_to(Point::new(150.0, 150.0));
        t.cancel();
        assert!(!t.is_active());
        assert_eq!(t.position(), Point::new(96.0, 48.0));
    }
}
