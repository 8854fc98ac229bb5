use crate::arena::nav::Area;
use crate::arena::target::DockStage;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A dock sequence timer elapsed
    Dock {
        area: Area,
        generation: u64,
        stage: DockStage,
    },

    /// Tick for animation
    Tick,
}
