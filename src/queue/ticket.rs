//! Tickets handed out to guests joining the line

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who the guest is, as shown on the display. The queue never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAttributes {
    pub name: String,
    pub avatar: String,
    pub snack: String,
}

impl DisplayAttributes {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>, snack: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
            snack: snack.into(),
        }
    }
}

/// Filled in once, when the ticket leaves the line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub served_at: DateTime<Utc>,
    pub greeting: String,
}

/// One guest, either waiting in line or already served
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: u64,
    #[serde(flatten)]
    attributes: DisplayAttributes,
    is_priority: bool,
    joined_at: DateTime<Utc>,
    #[serde(flatten)]
    service: Option<ServiceRecord>,
}

impl Ticket {
    pub(crate) fn new(id: u64, attributes: DisplayAttributes, is_priority: bool) -> Self {
        Self {
            id,
            attributes,
            is_priority,
            joined_at: Utc::now(),
            service: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn attributes(&self) -> &DisplayAttributes {
        &self.attributes
    }

    pub fn is_priority(&self) -> bool {
        self.is_priority
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    pub fn served_at(&self) -> Option<DateTime<Utc>> {
        self.service.as_ref().map(|s| s.served_at)
    }

    pub fn greeting(&self) -> Option<&str> {
        self.service.as_ref().map(|s| s.greeting.as_str())
    }

    pub fn is_served(&self) -> bool {
        self.service.is_some()
    }

    /// Stamp the ticket as served. A ticket that already carries a service
    /// record keeps it.
    pub(crate) fn mark_served(mut self, served_at: DateTime<Utc>, greeting: String) -> Self {
        if self.service.is_none() {
            self.service = Some(ServiceRecord {
                served_at,
                greeting,
            });
        }
        self
    }
}
