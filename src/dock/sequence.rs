use crate::app::event::AppEvent;
use crate::arena::target::{DockStage, DockTicket};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawn the two-stage timer for one dock ticket.
pub fn spawn_sequence(
    ticket: DockTicket,
    connect_delay: Duration,
    depart_delay: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(connect_delay).await;
        if send_stage(&event_tx, ticket, DockStage::Departing).is_err() {
            return;
        }
        tokio::time::sleep(depart_delay).await;
        let _ = send_stage(&event_tx, ticket, DockStage::Launched);
    })
}

fn send_stage(
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    ticket: DockTicket,
    stage: DockStage,
) -> Result<(), mpsc::error::SendError<AppEvent>> {
    event_tx.send(AppEvent::Dock {
        area: ticket.area,
        generation: ticket.generation,
        stage,
    })
}
