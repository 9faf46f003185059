use crate::queue::DEFAULT_BASE_TICKET_ID;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QueueConfig {
    #[serde(default = "default_base_ticket_id")]
    pub base_ticket_id: u64,
    /// Used for the wait estimate
    #[serde(default = "default_minutes_per_guest")]
    pub minutes_per_guest: u32,
    /// How many served tickets the display shows
    #[serde(default = "default_history_display")]
    pub history_display: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            base_ticket_id: default_base_ticket_id(),
            minutes_per_guest: default_minutes_per_guest(),
            history_display: default_history_display(),
        }
    }
}

fn default_base_ticket_id() -> u64 {
    DEFAULT_BASE_TICKET_ID
}

fn default_minutes_per_guest() -> u32 {
    2
}

fn default_history_display() -> usize {
    5
}
