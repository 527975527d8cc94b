//! # Stockroom HTTP Server Module
//!
//! Axum server exposing the item API over the SQLite store.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/items` - List and create items
//! - `/api/items/:id` - Fetch, replace and delete one item

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod item_routes;
pub mod response;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
