//! HTTP layer for bookshelf
//!
//! Stateless translation between the fixed route table and the book
//! store. Each handler maps to exactly one store call.

mod config;
mod errors;
mod response;
mod routes;
mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{BookCreated, BookUpdated, MessageResponse};
pub use routes::{book_routes, AppState};
pub use server::HttpServer;
