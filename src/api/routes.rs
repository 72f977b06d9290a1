use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::ws::ws_handler;
use crate::hub::Hub;
use crate::store::store::SharedOrderStore;
use crate::types::menu::{MenuItem, NewMenuItem};
use crate::types::order::{CreateOrderRequest, Order};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedOrderStore,
    pub hub: Hub,
}

async fn health() -> &'static str {
    "healthy"
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/orders", post(create_order).get(list_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", patch(update_order_status))
        .route("/api/menu", get(list_menu).post(create_menu_item))
        .route("/api/menu/{id}", delete(delete_menu_item))
        .route("/ws", get(ws_handler))
        .with_state(state)
}

/// POST /api/orders: store the order, then push it whole to every connected
/// kitchen display.
async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Order>, ApiError> {
    let req: CreateOrderRequest =
        serde_json::from_value(body).map_err(|_| ApiError::InvalidInput("Invalid order data"))?;

    let order = {
        let mut store = state.store.write().await;
        store.create_order(req.items, req.total, req.status)
    };
    state.hub.broadcast_new_order(&order);
    info!(order_id = %order.id, total = %order.total, "order created");

    Ok(Json(order))
}

async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    let store = state.store.read().await;
    Json(store.all_orders())
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, ApiError> {
    let store = state.store.read().await;
    store
        .get_order(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Order not found"))
}

#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    status: Option<String>,
}

/// PATCH /api/orders/{id}/status: last-write-wins on the status field, then
/// push a lightweight delta so displays re-fetch.
async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, ApiError> {
    let status = body
        .status
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::InvalidInput("Status is required"))?;

    let updated = {
        let mut store = state.store.write().await;
        store.update_status(id, &status)
    }
    .ok_or(ApiError::NotFound("Order not found"))?;

    state.hub.broadcast_status_change(id, &status);
    info!(order_id = %id, status = %status, "order status updated");

    Ok(Json(updated))
}

async fn list_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    let store = state.store.read().await;
    Json(store.all_menu_items())
}

async fn create_menu_item(
    State(state): State<AppState>,
    Json(new): Json<NewMenuItem>,
) -> (StatusCode, Json<MenuItem>) {
    let mut store = state.store.write().await;
    let item = store.create_menu_item(new);
    (StatusCode::CREATED, Json(item))
}

async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    if store.delete_menu_item(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Menu item not found"))
    }
}
