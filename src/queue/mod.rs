//! Queue system for the concession line
//!
//! This module provides:
//! - A single waiting line with VIP placement behind the guest being served
//! - A most-recent-first history of served tickets
//! - Event-driven listeners for the live display
//! - The serve transition that greets each guest on the way out

pub mod service;
pub mod store;
pub mod ticket;

pub use service::{serve_next, ServiceDesk};
pub use store::{QueueEvent, QueueStore, DEFAULT_BASE_TICKET_ID};
pub use ticket::{DisplayAttributes, ServiceRecord, Ticket};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared queue store instance
pub type SharedQueueStore = Arc<RwLock<QueueStore>>;

/// Create a new shared queue store
pub fn create_shared_store(base_id: u64) -> SharedQueueStore {
    Arc::new(RwLock::new(QueueStore::new(base_id)))
}
