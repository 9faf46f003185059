//! One operator session: the queue, the counter and the active theme

use crate::config::queue_config::QueueConfig;
use crate::greeting::{GreetingPolicy, GreetingProvider};
use crate::queue::{
    create_shared_store, DisplayAttributes, QueueEvent, ServiceDesk, SharedQueueStore, Ticket,
};
use crate::roster;
use crate::theme::{self, Theme};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::RwLock;
use tracing::info;

/// One row of the waiting line as displayed
#[derive(Debug, Clone, Serialize)]
pub struct LineEntry {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub status: String,
}

/// Everything the live display needs to draw itself
#[derive(Debug, Clone, Serialize)]
pub struct DisplaySnapshot {
    pub theme: Theme,
    pub themes: &'static [Theme],
    pub line: Vec<LineEntry>,
    pub history: Vec<Ticket>,
    pub in_line: usize,
    pub served: usize,
    pub wait_minutes: u32,
    pub serving: bool,
    pub provider_configured: bool,
}

/// Label for the ticket at `index` in the line
pub fn line_status(index: usize) -> String {
    if index == 0 {
        "SERVING NOW".to_string()
    } else {
        format!("WAITING #{}", index)
    }
}

pub struct CinemaSession {
    store: SharedQueueStore,
    desk: ServiceDesk,
    theme: RwLock<&'static Theme>,
    queue_config: QueueConfig,
}

impl CinemaSession {
    pub fn new(
        queue_config: QueueConfig,
        initial_theme: &'static Theme,
        provider: Option<Arc<dyn GreetingProvider>>,
        policy: GreetingPolicy,
    ) -> Self {
        let store = create_shared_store(queue_config.base_ticket_id);
        let desk = ServiceDesk::new(store.clone(), provider, policy);
        Self {
            store,
            desk,
            theme: RwLock::new(initial_theme),
            queue_config,
        }
    }

    pub fn store(&self) -> &SharedQueueStore {
        &self.store
    }

    pub async fn admit(&self, attributes: DisplayAttributes, vip: bool) -> Ticket {
        self.store.write().await.enqueue(attributes, vip)
    }

    /// Admit a guest drawn from the roster
    pub async fn admit_random(&self, vip: bool) -> Ticket {
        let guest = roster::random_guest(&mut rand::thread_rng());
        self.admit(guest, vip).await
    }

    /// Serve the head of the line under the active theme
    pub async fn serve_next(&self) -> Option<Ticket> {
        let label = self.theme.read().await.name;
        self.desk.serve_next(label).await
    }

    pub async fn reset(&self) {
        self.store.write().await.reset();
    }

    pub async fn theme(&self) -> &'static Theme {
        *self.theme.read().await
    }

    /// Switch the display theme; `None` when the id is unknown
    pub async fn set_theme(&self, id: &str) -> Option<&'static Theme> {
        let theme = theme::find_theme(id)?;
        *self.theme.write().await = theme;
        info!("Theme switched to {}", theme.name);
        self.store.write().await.notify(QueueEvent::DisplayChanged);
        Some(theme)
    }

    pub async fn subscribe(&self) -> UnboundedReceiver<QueueEvent> {
        self.store.write().await.subscribe()
    }

    pub async fn snapshot(&self) -> DisplaySnapshot {
        let theme = self.theme().await;
        let store = self.store.read().await;

        let line = store
            .line()
            .enumerate()
            .map(|(index, ticket)| LineEntry {
                ticket: ticket.clone(),
                status: line_status(index),
            })
            .collect();

        DisplaySnapshot {
            theme: *theme,
            themes: theme::THEMES,
            line,
            history: store.recent_history(self.queue_config.history_display),
            in_line: store.line_len(),
            served: store.history_len(),
            wait_minutes: store.estimated_wait_minutes(self.queue_config.minutes_per_guest),
            serving: self.desk.is_serving(),
            provider_configured: self.desk.has_provider(),
        }
    }
}
