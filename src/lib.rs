// src/lib.rs

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

// Entry points used by the binary and the integration tests
pub use routes::create_router;
pub use state::AppState;
