use crate::app::event::AppEvent;
use crate::arena::nav::Area;
use crate::arena::target::DockTicket;
use crate::config::model::TimingConfig;
use crate::dock::sequence;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Owns the pending dock sequence of every ship.
pub struct DockManager {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    connect_delay: Duration,
    depart_delay: Duration,
    pending: HashMap<Area, AbortHandle>,
}

impl DockManager {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, timing: &TimingConfig) -> Self {
        Self {
            event_tx,
            connect_delay: Duration::from_millis(timing.connect_delay_ms),
            depart_delay: Duration::from_millis(timing.depart_delay_ms),
            pending: HashMap::new(),
        }
    }

    /// Start the sequence for `ticket`, replacing any older one for the same ship.
    pub fn schedule(&mut self, ticket: DockTicket) {
        let handle = sequence::spawn_sequence(
            ticket,
            self.connect_delay,
            self.depart_delay,
            self.event_tx.clone(),
        );
        if let Some(old) = self.pending.insert(ticket.area, handle.abort_handle()) {
            old.abort();
        }
        tracing::debug!(area = %ticket.area, generation = ticket.generation, "dock sequence scheduled");
    }

    pub fn cancel(&mut self, area: Area) {
        if let Some(handle) = self.pending.remove(&area) {
            handle.abort();
            tracing::debug!(%area, "dock sequence cancelled");
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }

    /// Forget a sequence that has run to completion.
    pub fn finished(&mut self, area: Area) {
        self.pending.remove(&area);
    }

    #[cfg(test)]
    pub fn is_pending(&self, area: Area) -> bool {
        self.pending
            .get(&area)
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for DockManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
