//! Serving the guest at the front of the line

use super::{QueueEvent, SharedQueueStore, Ticket};
use crate::greeting::{build_prompt, resolve_greeting, GreetingOutcome, GreetingPolicy, GreetingProvider};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Pop the head of the line, greet it and record it in history.
///
/// Returns `None` when nobody is waiting, or when the session was reset
/// while the guest was being greeted. The store lock is released while the
/// provider is consulted; the ticket only reaches history once it carries
/// its greeting and service time.
pub async fn serve_next(
    store: &SharedQueueStore,
    provider: Option<&dyn GreetingProvider>,
    policy: &GreetingPolicy,
    context_label: &str,
) -> Option<Ticket> {
    serve_popped(store, provider, policy, context_label)
        .await
        .and_then(|(_, ticket)| ticket)
}

/// Same as `serve_next`, but also reports the id taken off the line even
/// when a reset discarded the ticket afterwards
async fn serve_popped(
    store: &SharedQueueStore,
    provider: Option<&dyn GreetingProvider>,
    policy: &GreetingPolicy,
    context_label: &str,
) -> Option<(u64, Option<Ticket>)> {
    let (ticket, epoch) = {
        let mut store = store.write().await;
        let ticket = store.serve_next()?;
        (ticket, store.epoch())
    };
    let id = ticket.id();

    let prompt = build_prompt(ticket.attributes(), context_label);
    let greeting = resolve_greeting(provider, &prompt, policy).await;
    if greeting.outcome == GreetingOutcome::Generated {
        info!("Generated greeting for ticket #{}: {}", id, greeting.text);
    }

    let ticket = ticket.mark_served(Utc::now(), greeting.text);
    if !store.write().await.record_served(ticket.clone(), epoch) {
        warn!("Serve of ticket #{} was interrupted by a reset", id);
        return Some((id, None));
    }

    Some((id, Some(ticket)))
}

/// The counter: one store, one optional provider, one serve at a time
pub struct ServiceDesk {
    store: SharedQueueStore,
    provider: Option<Arc<dyn GreetingProvider>>,
    policy: GreetingPolicy,
    serving: Mutex<()>,
}

impl ServiceDesk {
    pub fn new(
        store: SharedQueueStore,
        provider: Option<Arc<dyn GreetingProvider>>,
        policy: GreetingPolicy,
    ) -> Self {
        Self {
            store,
            provider,
            policy,
            serving: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &SharedQueueStore {
        &self.store
    }

    pub fn policy(&self) -> &GreetingPolicy {
        &self.policy
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Serve the next guest. A serve requested while another is running
    /// waits for it to finish.
    ///
    /// Subscribers get `ServeFinished` only after the desk is free again, so
    /// a snapshot taken on that event no longer reports a serve in progress.
    pub async fn serve_next(&self, context_label: &str) -> Option<Ticket> {
        let guard = self.serving.lock().await;
        let outcome = serve_popped(
            &self.store,
            self.provider.as_deref(),
            &self.policy,
            context_label,
        )
        .await;
        drop(guard);

        let (id, served) = outcome?;
        self.store
            .write()
            .await
            .notify(QueueEvent::ServeFinished { id });
        served
    }

    /// True while a serve is waiting on the provider
    pub fn is_serving(&self) -> bool {
        self.serving.try_lock().is_err()
    }
}
