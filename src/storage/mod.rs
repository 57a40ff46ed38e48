//! Append-only document log for bookshelf
//!
//! The log holds the canonical persistent state of the catalog. One
//! record per write, no in-place updates. Deletes are tombstones.
//! Replay order determines catalog order and the latest record for a
//! document id wins.
//!
//! Every record carries a crc32 checksum that is verified on replay.
//! A corrupt or truncated record fails replay with an explicit error;
//! it is never skipped.

mod checksum;
mod errors;
mod reader;
mod record;
mod writer;

pub use checksum::compute_checksum;
pub use errors::{StorageError, StorageResult};
pub use reader::LogReader;
pub use record::DocumentRecord;
pub use writer::LogWriter;
