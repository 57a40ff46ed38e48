//! Record checksums
//!
//! crc32 over the serialized record, excluding the checksum field
//! itself. Fast, and sufficient to catch torn writes and bit rot.

/// Compute the crc32 checksum of a byte slice
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
