//! Order store contract tests: identity, ordering, status updates, menu CRUD.

use std::collections::HashSet;

use cafe_pos::menu::default_menu;
use cafe_pos::store::store::OrderStore;
use cafe_pos::types::menu::NewMenuItem;
use cafe_pos::types::order::{OrderItem, STATUS_COMPLETED, STATUS_PENDING};
use uuid::Uuid;

fn latte(quantity: u32) -> OrderItem {
    OrderItem {
        id: "1".to_string(),
        name: "Latte".to_string(),
        price: 2.75,
        quantity,
    }
}

// --- Orders ---

#[test]
fn create_assigns_distinct_ids() {
    let mut store = OrderStore::new();
    let mut ids = HashSet::new();
    for _ in 0..100 {
        let order = store.create_order(vec![latte(1)], "2.75".to_string(), None);
        assert!(ids.insert(order.id), "duplicate order id {}", order.id);
    }
}

#[test]
fn create_defaults_to_pending_and_keeps_lines() {
    let mut store = OrderStore::new();
    let order = store.create_order(vec![latte(2)], "5.50".to_string(), None);

    assert_eq!(order.status, STATUS_PENDING);
    assert_eq!(order.total, "5.50");
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[0].name, "Latte");
}

#[test]
fn create_honors_explicit_status() {
    let mut store = OrderStore::new();
    let order = store.create_order(
        vec![latte(1)],
        "2.75".to_string(),
        Some(STATUS_COMPLETED.to_string()),
    );

    assert_eq!(order.status, STATUS_COMPLETED);
    assert_eq!(store.get_order(order.id).unwrap().status, STATUS_COMPLETED);
}

#[test]
fn get_order_roundtrip_and_unknown() {
    let mut store = OrderStore::new();
    let order = store.create_order(vec![latte(1)], "2.75".to_string(), None);

    assert_eq!(store.get_order(order.id), Some(order));
    assert_eq!(store.get_order(Uuid::new_v4()), None);
}

#[test]
fn all_orders_newest_first() {
    let mut store = OrderStore::new();
    let mut created = Vec::new();
    for i in 0..5 {
        let order = store.create_order(vec![latte(1)], format!("{i}.00"), None);
        created.push(order.id);
    }

    let listed = store.all_orders();
    assert_eq!(listed.len(), 5);
    for pair in listed.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "orders not sorted newest first"
        );
    }
    let listed_ids: HashSet<Uuid> = listed.iter().map(|o| o.id).collect();
    let created_ids: HashSet<Uuid> = created.into_iter().collect();
    assert_eq!(listed_ids, created_ids);
}

#[test]
fn update_status_unknown_id_leaves_store_unchanged() {
    let mut store = OrderStore::new();
    store.create_order(vec![latte(1)], "2.75".to_string(), None);
    let before = store.all_orders();

    assert_eq!(store.update_status(Uuid::new_v4(), STATUS_COMPLETED), None);
    assert_eq!(store.all_orders(), before);
}

#[test]
fn update_status_replaces_only_status() {
    let mut store = OrderStore::new();
    let order = store.create_order(vec![latte(2)], "5.50".to_string(), None);

    let updated = store.update_status(order.id, STATUS_COMPLETED).unwrap();
    assert_eq!(updated.status, STATUS_COMPLETED);

    let fetched = store.get_order(order.id).unwrap();
    assert_eq!(fetched.id, order.id);
    assert_eq!(fetched.items, order.items);
    assert_eq!(fetched.total, order.total);
    assert_eq!(fetched.created_at, order.created_at);
    assert_eq!(fetched.status, STATUS_COMPLETED);
}

#[test]
fn update_status_accepts_arbitrary_strings() {
    // No state machine is enforced on the status field.
    let mut store = OrderStore::new();
    let order = store.create_order(vec![latte(1)], "2.75".to_string(), None);

    let updated = store.update_status(order.id, "on-hold").unwrap();
    assert_eq!(updated.status, "on-hold");
}

// --- Menu ---

#[test]
fn menu_item_roundtrip() {
    let mut store = OrderStore::new();
    let item = store.create_menu_item(NewMenuItem {
        name: "Mocha".to_string(),
        price: 3.25,
        category: "Hot Drinks".to_string(),
    });

    let fetched = store.get_menu_item(item.id).unwrap();
    assert_eq!(fetched, item);
    assert_eq!(store.all_menu_items().len(), 1);
}

#[test]
fn delete_menu_item_reports_absence() {
    let mut store = OrderStore::new();
    let item = store.create_menu_item(NewMenuItem {
        name: "Mocha".to_string(),
        price: 3.25,
        category: "Hot Drinks".to_string(),
    });

    assert!(store.delete_menu_item(item.id));
    assert!(!store.delete_menu_item(item.id));
    assert!(store.all_menu_items().is_empty());
}

#[test]
fn default_menu_seeds_full_card() {
    let mut store = OrderStore::new();
    for item in default_menu() {
        store.create_menu_item(item);
    }

    let items = store.all_menu_items();
    assert_eq!(items.len(), 32);
    let latte = items.iter().find(|i| i.name == "Latte").unwrap();
    assert_eq!(latte.price, 2.75);
    assert_eq!(latte.category, "Hot Drinks");
}
