//! Document log record format
//!
//! On-disk layout, little-endian:
//!
//! ```text
//! +------------------+
//! | Record Length    | (u32, total including this field)
//! +------------------+
//! | Document ID      | (length-prefixed string)
//! +------------------+
//! | Tombstone Flag   | (u8: 0 = live, 1 = deleted)
//! +------------------+
//! | Body             | (length-prefixed bytes, empty for tombstones)
//! +------------------+
//! | Checksum         | (u32 crc32 over everything above)
//! +------------------+
//! ```
//!
//! The body is opaque to this layer; the catalog stores serialized
//! book JSON in it.

use std::io::{self, Read};

use super::checksum::compute_checksum;

// len + id len prefix + tombstone + body len prefix + checksum
const MIN_RECORD_SIZE: usize = 4 + 4 + 1 + 4 + 4;

/// One record in the document log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Document identifier this record applies to
    pub document_id: String,
    /// Whether this record deletes the document
    pub is_tombstone: bool,
    /// Full document body (empty for tombstones)
    pub body: Vec<u8>,
}

impl DocumentRecord {
    /// Record for a live document write (insert or full replace)
    pub fn write(document_id: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            document_id: document_id.into(),
            is_tombstone: false,
            body,
        }
    }

    /// Tombstone record for a deleted document
    pub fn tombstone(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            is_tombstone: true,
            body: Vec::new(),
        }
    }

    fn serialize_body(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(9 + self.document_id.len() + self.body.len());

        buf.extend_from_slice(&(self.document_id.len() as u32).to_le_bytes());
        buf.extend_from_slice(self.document_id.as_bytes());
        buf.push(u8::from(self.is_tombstone));
        buf.extend_from_slice(&(self.body.len() as u32).to_le_bytes());
        buf.extend_from_slice(&self.body);

        buf
    }

    /// Serialize the complete record, checksum included
    pub fn serialize(&self) -> Vec<u8> {
        let body = self.serialize_body();
        let record_length = (4 + body.len() + 4) as u32;

        // Checksum covers the length prefix and the body
        let mut checked = Vec::with_capacity(4 + body.len());
        checked.extend_from_slice(&record_length.to_le_bytes());
        checked.extend_from_slice(&body);
        let checksum = compute_checksum(&checked);

        let mut record = Vec::with_capacity(record_length as usize);
        record.extend_from_slice(&record_length.to_le_bytes());
        record.extend_from_slice(&body);
        record.extend_from_slice(&checksum.to_le_bytes());

        record
    }

    /// Deserialize one record from the front of `data`, verifying the
    /// checksum. Returns the record and the number of bytes consumed.
    pub fn deserialize(data: &[u8]) -> io::Result<(Self, usize)> {
        if data.len() < MIN_RECORD_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "record too short",
            ));
        }

        let record_length = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

        if record_length < MIN_RECORD_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid record length: {}", record_length),
            ));
        }

        if data.len() < record_length {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "record truncated: expected {} bytes, got {}",
                    record_length,
                    data.len()
                ),
            ));
        }

        let checksum_offset = record_length - 4;
        let stored_checksum = u32::from_le_bytes([
            data[checksum_offset],
            data[checksum_offset + 1],
            data[checksum_offset + 2],
            data[checksum_offset + 3],
        ]);
        let computed_checksum = compute_checksum(&data[0..checksum_offset]);

        if computed_checksum != stored_checksum {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "checksum mismatch: computed {:08x}, stored {:08x}",
                    computed_checksum, stored_checksum
                ),
            ));
        }

        let mut cursor = io::Cursor::new(&data[4..checksum_offset]);

        let mut len_buf = [0u8; 4];
        cursor.read_exact(&mut len_buf)?;
        let id_len = u32::from_le_bytes(len_buf) as usize;
        let mut id_buf = vec![0u8; id_len];
        cursor.read_exact(&mut id_buf)?;
        let document_id = String::from_utf8(id_buf).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("invalid UTF-8: {}", e))
        })?;

        let mut flag = [0u8; 1];
        cursor.read_exact(&mut flag)?;
        let is_tombstone = flag[0] != 0;

        cursor.read_exact(&mut len_buf)?;
        let body_len = u32::from_le_bytes(len_buf) as usize;
        let mut body = vec![0u8; body_len];
        cursor.read_exact(&mut body)?;

        Ok((
            Self {
                document_id,
                is_tombstone,
                body,
            },
            record_length,
        ))
    }
}
