//! Cross-component event notifications
//!
//! Dashboards and staff views react to schedule and audit changes through a
//! typed broadcast channel. Delivery is at-least-once per subscriber and
//! consumers must tolerate duplicates; publishing with no subscribers is not
//! an error. The bus is constructed once in `main` and handed to the
//! components that need it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::Department;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Events emitted by the production core
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum DashboardEvent {
    ScheduleUpdated {
        schedule_id: String,
        department: Department,
        timestamp: DateTime<Utc>,
    },
    NewAudit {
        audit_uid: String,
        department: Department,
        timestamp: DateTime<Utc>,
    },
    DataUpdated {
        department: Department,
        timestamp: DateTime<Utc>,
    },
    #[serde(rename = "PRODUCTION_COMPLETED")]
    ProductionCompleted {
        item_id: String,
        audit_uid: String,
        department: Department,
        timestamp: DateTime<Utc>,
    },
}

/// Broadcast bus for dashboard events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DashboardEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// A send error only means nobody is listening right now.
    pub fn publish(&self, event: DashboardEvent) {
        tracing::debug!(?event, "publishing dashboard event");
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.publish(DashboardEvent::DataUpdated {
            department: Department::Bakery,
            timestamp: Utc::now(),
        });

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, DashboardEvent::DataUpdated { .. }));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_not_an_error() {
        let bus = EventBus::new();
        bus.publish(DashboardEvent::DataUpdated {
            department: Department::Hmr,
            timestamp: Utc::now(),
        });
    }

    #[tokio::test]
    async fn test_all_subscribers_see_each_event() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(DashboardEvent::NewAudit {
            audit_uid: "2024-03-15-R101-1".to_string(),
            department: Department::Butchery,
            timestamp: Utc::now(),
        });

        assert!(matches!(
            rx1.recv().await.unwrap(),
            DashboardEvent::NewAudit { .. }
        ));
        assert!(matches!(
            rx2.recv().await.unwrap(),
            DashboardEvent::NewAudit { .. }
        ));
    }
}
