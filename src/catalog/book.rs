//! Book record and boundary DTOs
//!
//! Wire format is JSON with camelCase keys; optional fields are
//! omitted from output when absent. `title` is the only required
//! field and its presence is checked at creation, not by the
//! deserializer, so a missing title surfaces as a domain error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Assigned by the store at creation, immutable
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

impl Book {
    /// True if this book carries the given genre tag
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres
            .as_ref()
            .is_some_and(|genres| genres.iter().any(|g| g == genre))
    }
}

/// Creation payload; everything optional so that a missing title is
/// reported by the catalog rather than rejected at deserialization
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub rating: Option<f64>,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
}

impl BookDraft {
    /// Materialize a book from this draft under a fresh identifier.
    /// Returns `None` when the title is missing or empty.
    pub fn into_book(self) -> Option<Book> {
        let title = self.title.filter(|t| !t.is_empty())?;

        Some(Book {
            id: Uuid::new_v4(),
            title,
            author: self.author,
            published_year: self.published_year,
            genres: self.genres,
            language: self.language,
            country: self.country,
            rating: self.rating,
            summary: self.summary,
            cover_image_url: self.cover_image_url,
        })
    }
}

/// Partial update; `None` fields are left unchanged, last write wins
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub rating: Option<f64>,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
}

impl BookPatch {
    /// Apply this patch to a book in place
    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = Some(author.clone());
        }
        if let Some(year) = self.published_year {
            book.published_year = Some(year);
        }
        if let Some(genres) = &self.genres {
            book.genres = Some(genres.clone());
        }
        if let Some(language) = &self.language {
            book.language = Some(language.clone());
        }
        if let Some(country) = &self.country {
            book.country = Some(country.clone());
        }
        if let Some(rating) = self.rating {
            book.rating = Some(rating);
        }
        if let Some(summary) = &self.summary {
            book.summary = Some(summary.clone());
        }
        if let Some(url) = &self.cover_image_url {
            book.cover_image_url = Some(url.clone());
        }
    }
}
