//! Book catalog for bookshelf
//!
//! The catalog is the data access layer: one method per operation,
//! each performing exactly one store action. `BookStore` is the trait
//! the HTTP layer is handed (no process-wide singleton); `FileCatalog`
//! is the durable implementation and `MemoryCatalog` the in-memory
//! one used in tests.

mod book;
mod errors;
mod file;
mod store;

pub use book::{Book, BookDraft, BookPatch};
pub use errors::{CatalogError, CatalogResult};
pub use file::FileCatalog;
pub use store::{BookStore, MemoryCatalog};
