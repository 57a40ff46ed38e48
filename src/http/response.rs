//! Success response envelopes
//!
//! Read endpoints return the bare record or array; write endpoints
//! wrap the record in `{message, <entity>}`.

use serde::Serialize;

use crate::catalog::Book;

/// Body for a successful create
#[derive(Debug, Clone, Serialize)]
pub struct BookCreated {
    pub message: &'static str,
    pub book: Book,
}

impl BookCreated {
    pub fn new(book: Book) -> Self {
        Self {
            message: "Book added successfully.",
            book,
        }
    }
}

/// Body for a successful update
#[derive(Debug, Clone, Serialize)]
pub struct BookUpdated {
    pub message: &'static str,
    #[serde(rename = "updatedBook")]
    pub updated_book: Book,
}

impl BookUpdated {
    pub fn new(message: &'static str, updated_book: Book) -> Self {
        Self {
            message,
            updated_book,
        }
    }
}

/// Message-only body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
