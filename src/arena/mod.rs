//! Drag/drop interaction model: the pipe, the ships, and the navigator.
//!
//! Nothing in here knows about terminals. Points are in arena units and
//! time arrives as tick counts and stage completions.

pub mod drag;
pub mod geometry;
pub mod nav;
pub mod target;

use crate::config::model::ArenaConfig;
use drag::{DragTracker, DropOutcome};
use geometry::Point;
use nav::Area;
use target::{DockStage, DropTarget};

pub struct Arena {
    pub tracker: DragTracker,
    pub targets: Vec<DropTarget>,
}

impl Arena {
    pub fn new(tracker: DragTracker, targets: Vec<DropTarget>) -> Self {
        Self { tracker, targets }
    }

    pub fn from_config(cfg: &ArenaConfig) -> Self {
        let tracker = DragTracker::new(cfg.bounds, cfg.origin, cfg.connection, cfg.pipe_radius);
        let targets = cfg
            .targets
            .iter()
            .map(|t| DropTarget::new(t.area, t.label.clone(), t.region))
            .collect();
        Self::new(tracker, targets)
    }

    /// True while any ship is between accepting a drop and launching.
    pub fn is_docking(&self) -> bool {
        self.targets.iter().any(|t| !t.is_idle())
    }

    pub fn target(&self, area: Area) -> Option<&DropTarget> {
        self.targets.iter().find(|t| t.area == area)
    }

    pub fn pointer_down(&mut self, p: Point, min_half: (f64, f64)) -> bool {
        if self.is_docking() {
            return false;
        }
        self.tracker.begin(p, min_half)
    }

    /// Keyboard pick-up at the pipe's current position.
    pub fn pick_up(&mut self) -> bool {
        if self.is_docking() {
            return false;
        }
        self.tracker.pick_up()
    }

    pub fn pointer_move(&mut self, p: Point) {
        self.tracker.move_to(p);
    }

    pub fn pointer_up(&mut self, p: Point, tick: u64) -> Option<DropOutcome> {
        self.tracker.end(p, &mut self.targets, tick)
    }

    /// Feed a timer completion to its target. Returns the area to
    /// navigate to once the ship has launched.
    pub fn complete_stage(&mut self, area: Area, generation: u64, stage: DockStage, tick: u64) -> Option<Area> {
        let target = self.targets.iter_mut().find(|t| t.area == area)?;
        let launched = target.advance(generation, stage, tick);
        if launched.is_some() {
            self.tracker.reset_to_origin();
        }
        launched
    }

    /// Reset the arena when its view is torn down. Returns the areas whose
    /// dock sequences were still pending.
    pub fn teardown(&mut self) -> Vec<Area> {
        self.tracker.cancel();
        let mut pending = Vec::new();
        for t in &mut self.targets {
            if !t.is_idle() {
                pending.push(t.area);
                t.reset();
            }
        }
        if !pending.is_empty() {
            self.tracker.reset_to_origin();
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::ArenaConfig;
    use target::DockPhase;

    const NO_MIN: (f64, f64) = (0.0, 0.0);

    #[test]
    fn test_from_default_config() {
        let arena = Arena::from_config(&ArenaConfig::default());
        assert_eq!(arena.targets.len(), 2);
        assert!(arena.target(Area::Lunar).is_some());
        assert!(arena.target(Area::Mars).is_some());
        assert_eq!(arena.tracker.position(), Point::new(96.0, 48.0));
    }

    #[test]
    fn test_second_drop_ignored_while_docking() {
        let mut arena = Arena::from_config(&ArenaConfig::default());
        let lunar = arena.target(Area::Lunar).unwrap().region.center();
        assert!(arena.pointer_down(Point::new(96.0, 48.0), NO_MIN));
        arena.pointer_move(lunar);
        assert!(matches!(arena.pointer_up(lunar, 0), Some(DropOutcome::Accepted(_))));
        assert!(arena.is_docking());

        // Pipe sits at the ship now; grabbing it again does nothing.
        assert!(!arena.pointer_down(lunar, NO_MIN));
        assert!(!arena.pick_up());
        assert_eq!(arena.pointer_up(lunar, 1), None);
    }

    #[test]
    fn test_launch_resets_pipe() {
        let mut arena = Arena::from_config(&ArenaConfig::default());
        let mars = arena.target(Area::Mars).unwrap().region.center();
        arena.pointer_down(Point::new(96.0, 48.0), NO_MIN);
        arena.pointer_move(mars);
        let Some(DropOutcome::Accepted(ticket)) = arena.pointer_up(mars, 0) else {
            panic!("drop on mars should be accepted");
        };
        assert_eq!(arena.complete_stage(Area::Mars, ticket.generation, DockStage::Departing, 10), None);
        assert_eq!(
            arena.complete_stage(Area::Mars, ticket.generation, DockStage::Launched, 50),
            Some(Area::Mars)
        );
        assert!(!arena.is_docking());
        assert_eq!(arena.tracker.position(), Point::new(96.0, 48.0));
    }

    #[test]
    fn test_teardown_reports_pending() {
        let mut arena = Arena::from_config(&ArenaConfig::default());
        let lunar = arena.target(Area::Lunar).unwrap().region.center();
        arena.pointer_down(Point::new(96.0, 48.0), NO_MIN);
        arena.pointer_up(lunar, 0);
        assert_eq!(arena.target(Area::Lunar).unwrap().phase(), DockPhase::Connected);

        assert_eq!(arena.teardown(), vec![Area::Lunar]);
        assert!(!arena.is_docking());
        assert!(arena.teardown().is_empty());
    }
}
