//! API Module
//!
//! HTTP handlers and routing over one shared cache.
//!
//! # Endpoints
//! - `PUT /save` - Store a key-value pair under a new key
//! - `GET /get/:key` - Retrieve a value by key
//! - `DELETE /del/:key` - Remove a key
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
