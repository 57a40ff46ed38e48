//! bookshelf - a minimal self-hosted book catalog REST service
//!
//! A fixed table of HTTP routes over a book store: create, list,
//! look up by title/author/genre/year, update, delete. The store is
//! backed by an append-only checksummed document log.

pub mod catalog;
pub mod cli;
pub mod http;
pub mod observability;
pub mod storage;
