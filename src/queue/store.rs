//! Waiting line and served history with event notifications

use super::ticket::{DisplayAttributes, Ticket};
use std::collections::VecDeque;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// First ticket number of a fresh session
pub const DEFAULT_BASE_TICKET_ID: u64 = 101;

/// Change notifications delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    Enqueued { id: u64, position: usize },
    ServeStarted { id: u64 },
    Served { id: u64 },
    /// The counter is free again, whether or not the ticket was recorded
    ServeFinished { id: u64 },
    Reset,
    DisplayChanged,
}

/// Owns the line, the history and the ticket counter for one session
#[derive(Debug)]
pub struct QueueStore {
    line: VecDeque<Ticket>,
    /// Most recently served first
    history: VecDeque<Ticket>,
    base_id: u64,
    next_id: u64,
    /// Bumped on reset so serves started earlier can be recognised
    epoch: u64,
    listeners: Vec<UnboundedSender<QueueEvent>>,
}

impl Default for QueueStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_TICKET_ID)
    }
}

impl QueueStore {
    /// Create an empty store whose first ticket is `base_id`
    pub fn new(base_id: u64) -> Self {
        Self {
            line: VecDeque::new(),
            history: VecDeque::new(),
            base_id,
            next_id: base_id,
            epoch: 0,
            listeners: Vec::new(),
        }
    }

    /// Admit a guest. Priority guests go right behind the ticket being
    /// served; everyone else joins the tail.
    pub fn enqueue(&mut self, attributes: DisplayAttributes, is_priority: bool) -> Ticket {
        let id = self.next_id;
        self.next_id += 1;

        let ticket = Ticket::new(id, attributes, is_priority);

        let position = if is_priority && !self.line.is_empty() {
            self.line.insert(1, ticket.clone());
            1
        } else {
            self.line.push_back(ticket.clone());
            self.line.len() - 1
        };

        info!(
            "Ticket #{} ({}) joined at position {}{}",
            id,
            ticket.attributes().name,
            position,
            if is_priority { " [VIP]" } else { "" }
        );
        self.notify(QueueEvent::Enqueued { id, position });

        ticket
    }

    /// Take the ticket at the front of the line, if any
    pub fn serve_next(&mut self) -> Option<Ticket> {
        let ticket = self.line.pop_front();
        match &ticket {
            Some(ticket) => {
                debug!("Ticket #{} left the line", ticket.id());
                self.notify(QueueEvent::ServeStarted { id: ticket.id() });
            }
            None => debug!("Serve requested on an empty line"),
        }
        ticket
    }

    /// Put a served ticket at the top of the history. Tickets taken before
    /// the last reset are dropped and `false` is returned.
    pub(crate) fn record_served(&mut self, ticket: Ticket, epoch: u64) -> bool {
        if epoch != self.epoch {
            warn!(
                "Discarding ticket #{} served before the session was reset",
                ticket.id()
            );
            return false;
        }

        let id = ticket.id();
        self.history.push_front(ticket);
        info!("Ticket #{} recorded in history", id);
        self.notify(QueueEvent::Served { id });
        true
    }

    /// Clear everything and restart numbering at the base id
    pub fn reset(&mut self) {
        info!(
            "Resetting session ({} waiting, {} served)",
            self.line.len(),
            self.history.len()
        );
        self.line.clear();
        self.history.clear();
        self.next_id = self.base_id;
        self.epoch += 1;
        self.notify(QueueEvent::Reset);
    }

    pub fn line(&self) -> impl ExactSizeIterator<Item = &Ticket> {
        self.line.iter()
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &Ticket> {
        self.history.iter()
    }

    /// The ticket at position 0
    pub fn now_serving(&self) -> Option<&Ticket> {
        self.line.front()
    }

    /// At most `limit` of the most recently served tickets
    pub fn recent_history(&self, limit: usize) -> Vec<Ticket> {
        self.history.iter().take(limit).cloned().collect()
    }

    pub fn line_len(&self) -> usize {
        self.line.len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Minutes until a newly arriving guest reaches the counter. The guest
    /// at position 0 is already being served.
    pub fn estimated_wait_minutes(&self, minutes_per_guest: u32) -> u32 {
        let waiting = self.line.len().saturating_sub(1) as u32;
        waiting * minutes_per_guest
    }

    /// Subscribe to store events
    pub fn subscribe(&mut self) -> UnboundedReceiver<QueueEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    /// Send an event to every live subscriber
    pub fn notify(&mut self, event: QueueEvent) {
        // Remove disconnected listeners
        self.listeners.retain(|sender| sender.send(event.clone()).is_ok());
    }
}
