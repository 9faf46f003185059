pub mod cli;
pub mod config;
pub mod greeting;
pub mod queue;
pub mod roster;
pub mod session;
pub mod theme;
pub mod web;

// Public API
pub use config::Config;
pub use greeting::{GreetingError, GreetingOutcome, GreetingPolicy, GreetingProvider};
pub use queue::{DisplayAttributes, QueueEvent, QueueStore, ServiceDesk, SharedQueueStore, Ticket};
pub use session::{CinemaSession, DisplaySnapshot};
