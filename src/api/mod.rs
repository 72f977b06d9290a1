pub mod error;
pub mod routes;
pub mod ws;
