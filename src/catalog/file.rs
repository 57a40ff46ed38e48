//! Durable book store over the document log
//!
//! Opening the catalog replays the log and rebuilds the live set in
//! memory; every mutation appends to the log before touching the
//! in-memory state, so an acknowledged write is on disk. Replay is
//! latest-record-wins per book id and tombstones drop the book.

use std::path::Path;
use std::sync::{Mutex, RwLock};

use super::book::{Book, BookDraft, BookPatch};
use super::errors::{CatalogError, CatalogResult};
use super::store::{parse_id, BookStore};
use crate::storage::{DocumentRecord, LogReader, LogWriter};

/// File-backed book store
pub struct FileCatalog {
    books: RwLock<Vec<Book>>,
    log: Mutex<LogWriter>,
}

impl FileCatalog {
    /// Open the catalog at `path`, replaying any existing log.
    ///
    /// This is the single connect step performed at startup; a replay
    /// failure (corruption, I/O) aborts the open.
    pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let records = LogReader::replay(&path)?;

        let mut books: Vec<Book> = Vec::new();
        for record in records {
            if record.is_tombstone {
                books.retain(|b| b.id.to_string() != record.document_id);
            } else {
                let book: Book = serde_json::from_slice(&record.body)?;
                match books.iter_mut().find(|b| b.id == book.id) {
                    Some(existing) => *existing = book,
                    None => books.push(book),
                }
            }
        }

        let log = LogWriter::open(path)?;

        Ok(Self {
            books: RwLock::new(books),
            log: Mutex::new(log),
        })
    }

    /// Number of live books
    pub fn len(&self) -> usize {
        self.books.read().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn append_write(&self, book: &Book) -> CatalogResult<()> {
        let body = serde_json::to_vec(book)?;
        let record = DocumentRecord::write(book.id.to_string(), body);
        self.log
            .lock()
            .map_err(|_| CatalogError::LockPoisoned)?
            .append(&record)?;
        Ok(())
    }

    fn append_tombstone(&self, book: &Book) -> CatalogResult<()> {
        let record = DocumentRecord::tombstone(book.id.to_string());
        self.log
            .lock()
            .map_err(|_| CatalogError::LockPoisoned)?
            .append(&record)?;
        Ok(())
    }

    fn read(&self) -> CatalogResult<std::sync::RwLockReadGuard<'_, Vec<Book>>> {
        self.books.read().map_err(|_| CatalogError::LockPoisoned)
    }

    fn write(&self) -> CatalogResult<std::sync::RwLockWriteGuard<'_, Vec<Book>>> {
        self.books.write().map_err(|_| CatalogError::LockPoisoned)
    }
}

impl BookStore for FileCatalog {
    fn create(&self, draft: BookDraft) -> CatalogResult<Book> {
        let book = draft.into_book().ok_or(CatalogError::MissingTitle)?;

        let mut books = self.write()?;
        self.append_write(&book)?;
        books.push(book.clone());
        Ok(book)
    }

    fn list_all(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    fn find_by_title(&self, title: &str) -> CatalogResult<Option<Book>> {
        Ok(self.read()?.iter().find(|b| b.title == title).cloned())
    }

    fn find_by_author(&self, author: &str) -> CatalogResult<Vec<Book>> {
        Ok(self
            .read()?
            .iter()
            .filter(|b| b.author.as_deref() == Some(author))
            .cloned()
            .collect())
    }

    fn find_by_genre(&self, genre: &str) -> CatalogResult<Vec<Book>> {
        Ok(self
            .read()?
            .iter()
            .filter(|b| b.has_genre(genre))
            .cloned()
            .collect())
    }

    fn find_by_year(&self, year: i32) -> CatalogResult<Vec<Book>> {
        Ok(self
            .read()?
            .iter()
            .filter(|b| b.published_year == Some(year))
            .cloned()
            .collect())
    }

    fn update_by_id(&self, id: &str, patch: BookPatch) -> CatalogResult<Option<Book>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let mut books = self.write()?;
        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        let mut updated = book.clone();
        patch.apply(&mut updated);
        self.append_write(&updated)?;
        *book = updated.clone();
        Ok(Some(updated))
    }

    fn update_by_title(&self, title: &str, patch: BookPatch) -> CatalogResult<Option<Book>> {
        let mut books = self.write()?;
        let Some(book) = books.iter_mut().find(|b| b.title == title) else {
            return Ok(None);
        };

        let mut updated = book.clone();
        patch.apply(&mut updated);
        self.append_write(&updated)?;
        *book = updated.clone();
        Ok(Some(updated))
    }

    fn delete_by_id(&self, id: &str) -> CatalogResult<Option<Book>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let mut books = self.write()?;
        let Some(idx) = books.iter().position(|b| b.id == id) else {
            return Ok(None);
        };

        self.append_tombstone(&books[idx])?;
        Ok(Some(books.remove(idx)))
    }
}
