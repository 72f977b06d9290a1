use std::sync::Arc;

use cafe_pos::api::routes::{AppState, app_router};
use cafe_pos::hub::Hub;
use cafe_pos::menu::default_menu;
use cafe_pos::store::store::{OrderStore, SharedOrderStore};
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut store = OrderStore::new();
    for item in default_menu() {
        store.create_menu_item(item);
    }
    let store: SharedOrderStore = Arc::new(RwLock::new(store));

    let app_state = AppState {
        store,
        hub: Hub::new(256),
    };

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{host}:{port}");

    let app = app_router(app_state);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!(%addr, "cafe POS server listening");
    axum::serve(listener, app).await.unwrap();
}
