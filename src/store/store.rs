//! In-memory order and menu storage. Volatile, process-lifetime only.
//! Testable without HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::menu::{MenuItem, NewMenuItem};
use crate::types::order::{Order, OrderItem, STATUS_PENDING};

pub type SharedOrderStore = Arc<RwLock<OrderStore>>;

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: HashMap<Uuid, Order>,
    menu_items: HashMap<Uuid, MenuItem>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order with a fresh id and creation timestamp. Status
    /// defaults to "pending" when the client does not send one. Performs no
    /// semantic validation of items or total.
    pub fn create_order(
        &mut self,
        items: Vec<OrderItem>,
        total: String,
        status: Option<String>,
    ) -> Order {
        let order = Order {
            id: Uuid::new_v4(),
            items,
            total,
            status: status.unwrap_or_else(|| STATUS_PENDING.to_string()),
            created_at: Utc::now(),
        };
        self.orders.insert(order.id, order.clone());
        order
    }

    pub fn get_order(&self, id: Uuid) -> Option<Order> {
        self.orders.get(&id).cloned()
    }

    /// All orders, newest first. The kitchen display depends on this ordering.
    pub fn all_orders(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.values().cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Replace the status field. Any string is accepted; transitions are not
    /// enforced here. Returns `None` and leaves the store unchanged when the
    /// id is unknown.
    pub fn update_status(&mut self, id: Uuid, status: &str) -> Option<Order> {
        let order = self.orders.get_mut(&id)?;
        order.status = status.to_string();
        Some(order.clone())
    }

    pub fn create_menu_item(&mut self, new: NewMenuItem) -> MenuItem {
        let item = MenuItem {
            id: Uuid::new_v4(),
            name: new.name,
            price: new.price,
            category: new.category,
        };
        self.menu_items.insert(item.id, item.clone());
        item
    }

    pub fn get_menu_item(&self, id: Uuid) -> Option<MenuItem> {
        self.menu_items.get(&id).cloned()
    }

    pub fn all_menu_items(&self) -> Vec<MenuItem> {
        self.menu_items.values().cloned().collect()
    }

    pub fn delete_menu_item(&mut self, id: Uuid) -> bool {
        self.menu_items.remove(&id).is_some()
    }
}
