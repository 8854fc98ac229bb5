use crate::arena::nav::Area;
use crate::arena::target::DockTicket;

#[derive(Debug, PartialEq)]
pub enum Action {
    /// Start the timed dock sequence for an accepted drop.
    ScheduleDock { ticket: DockTicket },
    /// Abort a sequence whose view was torn down.
    CancelDock { area: Area },
    /// A sequence ran to completion.
    DockComplete { area: Area },
    OpenLink { url: String },
    Quit,
}
