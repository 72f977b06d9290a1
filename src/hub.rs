//! Real-time fan-out of order events to connected kitchen displays.

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::types::order::Order;

/// Events pushed server-to-client on the kitchen WebSocket channel. A new
/// order carries the full payload because no subscriber has seen it yet; a
/// status change carries only the delta and subscribers re-fetch
/// (push-to-invalidate).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    NewOrder {
        order: Order,
    },
    StatusUpdate {
        #[serde(rename = "orderId")]
        order_id: Uuid,
        status: String,
    },
}

/// Broadcast hub for kitchen displays. Delivery is fire-and-forget,
/// at-most-once per currently-subscribed receiver; a subscriber that joins
/// after an event was sent does not see it.
#[derive(Debug, Clone)]
pub struct Hub {
    tx: broadcast::Sender<WsMessage>,
}

impl Hub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a subscriber. Dropping the receiver unsubscribes it.
    pub fn subscribe(&self) -> broadcast::Receiver<WsMessage> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn broadcast_new_order(&self, order: &Order) {
        // Send fails only when no display is connected; that is not an error.
        let _ = self.tx.send(WsMessage::NewOrder {
            order: order.clone(),
        });
    }

    pub fn broadcast_status_change(&self, order_id: Uuid, status: &str) {
        let _ = self.tx.send(WsMessage::StatusUpdate {
            order_id,
            status: status.to_string(),
        });
    }
}
