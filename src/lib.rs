pub mod api;
pub mod hub;
pub mod menu;
pub mod store;
pub mod types;
