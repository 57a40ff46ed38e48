//! Book store trait and in-memory implementation
//!
//! One method per operation; each performs exactly one store action
//! and propagates failures to the caller. The HTTP layer holds the
//! store as `Arc<dyn BookStore>`.

use std::sync::RwLock;

use uuid::Uuid;

use super::book::{Book, BookDraft, BookPatch};
use super::errors::{CatalogError, CatalogResult};

/// Data access operations over the book collection
pub trait BookStore: Send + Sync {
    /// Persist a new book; fails if the draft has no title
    fn create(&self, draft: BookDraft) -> CatalogResult<Book>;

    /// All books in store order; empty is a valid result
    fn list_all(&self) -> CatalogResult<Vec<Book>>;

    /// First book with exactly this title, if any
    fn find_by_title(&self, title: &str) -> CatalogResult<Option<Book>>;

    /// All books by exactly this author
    fn find_by_author(&self, author: &str) -> CatalogResult<Vec<Book>>;

    /// All books whose genre tags contain `genre`
    fn find_by_genre(&self, genre: &str) -> CatalogResult<Vec<Book>>;

    /// All books published in `year`
    fn find_by_year(&self, year: i32) -> CatalogResult<Vec<Book>>;

    /// Patch the book with this identifier; `None` if no such book.
    /// Returns the record as it stands after the update.
    fn update_by_id(&self, id: &str, patch: BookPatch) -> CatalogResult<Option<Book>>;

    /// Patch the first book with this title; `None` if no match
    fn update_by_title(&self, title: &str, patch: BookPatch) -> CatalogResult<Option<Book>>;

    /// Remove the book with this identifier, returning it
    fn delete_by_id(&self, id: &str) -> CatalogResult<Option<Book>>;
}

/// Parse a caller-supplied identifier. An unparseable id can match
/// nothing, which the callers report as an absent record.
pub(crate) fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

/// In-memory book store, used by unit and route tests
pub struct MemoryCatalog {
    books: RwLock<Vec<Book>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> CatalogResult<std::sync::RwLockReadGuard<'_, Vec<Book>>> {
        self.books.read().map_err(|_| CatalogError::LockPoisoned)
    }

    fn write(&self) -> CatalogResult<std::sync::RwLockWriteGuard<'_, Vec<Book>>> {
        self.books.write().map_err(|_| CatalogError::LockPoisoned)
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for MemoryCatalog {
    fn create(&self, draft: BookDraft) -> CatalogResult<Book> {
        let book = draft.into_book().ok_or(CatalogError::MissingTitle)?;
        self.write()?.push(book.clone());
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
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                patch.apply(book);
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    fn update_by_title(&self, title: &str, patch: BookPatch) -> CatalogResult<Option<Book>> {
        let mut books = self.write()?;
        match books.iter_mut().find(|b| b.title == title) {
            Some(book) => {
                patch.apply(book);
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_by_id(&self, id: &str) -> CatalogResult<Option<Book>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let mut books = self.write()?;
        match books.iter().position(|b| b.id == id) {
            Some(idx) => Ok(Some(books.remove(idx))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_requires_title() {
        let store = MemoryCatalog::new();
        let result = store.create(BookDraft::default());
        assert!(matches!(result, Err(CatalogError::MissingTitle)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_then_list() {
        let store = MemoryCatalog::new();
        store.create(draft("Dune")).unwrap();
        store.create(draft("Emma")).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Dune");
        assert_eq!(all[1].title, "Emma");
    }

    #[test]
    fn test_find_by_title_is_exact_and_first() {
        let store = MemoryCatalog::new();
        let first = store.create(draft("Dune")).unwrap();
        store.create(draft("Dune")).unwrap();

        let found = store.find_by_title("Dune").unwrap().unwrap();
        assert_eq!(found.id, first.id);

        assert!(store.find_by_title("dune").unwrap().is_none());
    }

    #[test]
    fn test_find_by_author() {
        let store = MemoryCatalog::new();
        store
            .create(BookDraft {
                author: Some("Frank Herbert".to_string()),
                ..draft("Dune")
            })
            .unwrap();

        assert_eq!(store.find_by_author("Frank Herbert").unwrap().len(), 1);
        assert!(store.find_by_author("Nobody").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_genre_checks_membership() {
        let store = MemoryCatalog::new();
        store
            .create(BookDraft {
                genres: Some(vec!["Business".to_string(), "Economics".to_string()]),
                ..draft("Zero to One")
            })
            .unwrap();

        assert_eq!(store.find_by_genre("Business").unwrap().len(), 1);
        assert_eq!(store.find_by_genre("Economics").unwrap().len(), 1);
        assert!(store.find_by_genre("Fiction").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_year() {
        let store = MemoryCatalog::new();
        store
            .create(BookDraft {
                published_year: Some(2012),
                ..draft("Antifragile")
            })
            .unwrap();

        assert_eq!(store.find_by_year(2012).unwrap().len(), 1);
        assert!(store.find_by_year(1999).unwrap().is_empty());
    }

    #[test]
    fn test_update_by_id_returns_post_update_record() {
        let store = MemoryCatalog::new();
        let book = store.create(draft("Dune")).unwrap();

        let patch = BookPatch {
            rating: Some(5.0),
            ..Default::default()
        };
        let updated = store
            .update_by_id(&book.id.to_string(), patch)
            .unwrap()
            .unwrap();

        assert_eq!(updated.rating, Some(5.0));
        assert_eq!(
            store.find_by_title("Dune").unwrap().unwrap().rating,
            Some(5.0)
        );
    }

    #[test]
    fn test_update_by_unknown_or_invalid_id() {
        let store = MemoryCatalog::new();
        store.create(draft("Dune")).unwrap();

        let patch = BookPatch::default();
        let missing = store.update_by_id(&Uuid::new_v4().to_string(), patch.clone());
        assert!(missing.unwrap().is_none());

        let invalid = store.update_by_id("not-a-uuid", patch);
        assert!(invalid.unwrap().is_none());
    }

    #[test]
    fn test_update_by_title_hits_first_match() {
        let store = MemoryCatalog::new();
        let first = store.create(draft("Dune")).unwrap();
        let second = store.create(draft("Dune")).unwrap();

        let patch = BookPatch {
            rating: Some(4.0),
            ..Default::default()
        };
        let updated = store.update_by_title("Dune", patch).unwrap().unwrap();
        assert_eq!(updated.id, first.id);

        let all = store.list_all().unwrap();
        assert_eq!(all[0].rating, Some(4.0));
        assert_eq!(all.iter().find(|b| b.id == second.id).unwrap().rating, None);
    }

    #[test]
    fn test_delete_returns_removed_book() {
        let store = MemoryCatalog::new();
        let book = store.create(draft("Dune")).unwrap();

        let deleted = store.delete_by_id(&book.id.to_string()).unwrap().unwrap();
        assert_eq!(deleted.id, book.id);
        assert!(store.find_by_title("Dune").unwrap().is_none());

        // Second delete finds nothing
        assert!(store.delete_by_id(&book.id.to_string()).unwrap().is_none());
    }
}
