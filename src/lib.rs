//! Server-rendered product catalog page backed by a hosted commerce API.

pub mod catalog;
pub mod components;
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use catalog::{CatalogError, CatalogService, CommerceClient};
pub use config::Config;
pub use state::AppState;
