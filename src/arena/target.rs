//! Spaceship drop targets and their dock sequence.
//!
//! Accepting a drop moves a target through `Connected` and `Departing`
//! before it hands back the area to navigate to. Stage completions come
//! from timers and carry the generation they were scheduled for, so a
//! completion that outlived its sequence is rejected.

use super::geometry::{Point, Region};
use super::nav::Area;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockPhase {
    #[default]
    Idle,
    /// Pipe attached, door closed.
    Connected,
    /// Ship is flying off.
    Departing,
}

/// A timer completion in the dock sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockStage {
    Departing,
    Launched,
}

/// Handed out by [`DropTarget::accept`]; identifies one dock sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockTicket {
    pub area: Area,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct DropTarget {
    pub area: Area,
    pub label: String,
    pub region: Region,
    phase: DockPhase,
    generation: u64,
    /// Tick at which the current phase began, for animation.
    phase_started_tick: u64,
}

impl DropTarget {
    pub fn new(area: Area, label: impl Into<String>, region: Region) -> Self {
        Self {
            area,
            label: label.into(),
            region,
            phase: DockPhase::Idle,
            generation: 0,
            phase_started_tick: 0,
        }
    }

    pub fn phase(&self) -> DockPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase_started_tick(&self) -> u64 {
        self.phase_started_tick
    }

    pub fn is_idle(&self) -> bool {
        self.phase == DockPhase::Idle
    }

    pub fn contains(&self, p: Point) -> bool {
        self.region.contains(p)
    }

    /// Accept a drop. Only an idle target accepts; the returned ticket
    /// must be used to schedule the rest of the sequence.
    pub fn accept(&mut self, tick: u64) -> Option<DockTicket> {
        if self.phase != DockPhase::Idle {
            tracing::debug!(target_area = %self.area, phase = ?self.phase, "drop ignored, target busy");
            return None;
        }
        self.generation += 1;
        self.phase = DockPhase::Connected;
        self.phase_started_tick = tick;
        tracing::info!(target_area = %self.area, generation = self.generation, "pipe connected");
        Some(DockTicket {
            area: self.area,
            generation: self.generation,
        })
    }

    /// Apply a timer completion. Returns the area to navigate to once the
    /// ship has launched.
    pub fn advance(&mut self, generation: u64, stage: DockStage, tick: u64) -> Option<Area> {
        if generation != self.generation {
            tracing::debug!(target_area = %self.area, generation, current = self.generation, "stale dock stage");
            return None;
        }
        match (self.phase, stage) {
            (DockPhase::Connected, DockStage::Departing) => {
                self.phase = DockPhase::Departing;
                self.phase_started_tick = tick;
                None
            }
            (DockPhase::Departing, DockStage::Launched) => {
                self.phase = DockPhase::Idle;
                self.phase_started_tick = tick;
                Some(self.area)
            }
            (phase, stage) => {
                tracing::debug!(target_area = %self.area, ?phase, ?stage, "out of order dock stage");
                None
            }
        }
    }

    /// Abandon any pending sequence. Bumping the generation invalidates
    /// completions already in flight.
    pub fn reset(&mut self) {
        if self.phase != DockPhase::Idle {
            self.generation += 1;
        }
        self.phase = DockPhase::Idle;
    }
}
