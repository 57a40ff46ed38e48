//! Observability for bookshelf
//!
//! Structured JSON logging: one line per event, deterministic field
//! ordering, errors routed to stderr.

mod logger;

pub use logger::{Logger, Severity};
