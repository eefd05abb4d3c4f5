//! Catalog state: the keyed collection of book records
//!
//! The catalog exclusively owns every [`Book`] record, keyed by ISBN.
//! It enforces identifier uniqueness, genre validity, and deletion
//! safety, and preserves insertion order for iteration and search.
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Order vec: iteration and search results follow insertion order
//! - Validate-then-commit: no operation leaves a record half-written
//!
//! `CatalogState` is not synchronized; [`LibraryCore`](crate::LibraryCore)
//! owns the lock that covers it together with the roster.

use circ_core::{Book, BookPatch, Entity, Error, GenreSet, Isbn, Result};
use rustc_hash::FxHashMap;

/// The book collection.
#[derive(Debug, Default)]
pub struct CatalogState {
    /// Records keyed by ISBN
    entries: FxHashMap<Isbn, Book>,
    /// ISBNs in insertion order; drives iteration and search order
    order: Vec<Isbn>,
}

impl CatalogState {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if an ISBN is present
    pub fn contains(&self, isbn: &Isbn) -> bool {
        self.entries.contains_key(isbn)
    }

    /// Look up a record by ISBN
    pub fn get(&self, isbn: &Isbn) -> Option<&Book> {
        self.entries.get(isbn)
    }

    pub(crate) fn get_mut(&mut self, isbn: &Isbn) -> Option<&mut Book> {
        self.entries.get_mut(isbn)
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.order.iter().filter_map(|isbn| self.entries.get(isbn))
    }

    /// Add a new record.
    ///
    /// Fails with [`Error::Duplicate`] if the ISBN is already present and
    /// [`Error::UnknownGenre`] if the genre is outside the closed set.
    /// A new record starts fully available regardless of the
    /// `available_copies` the caller passed in. Nothing is inserted on
    /// failure.
    pub fn add(&mut self, mut book: Book, genres: &GenreSet) -> Result<()> {
        if self.entries.contains_key(&book.isbn) {
            return Err(Error::Duplicate {
                entity: Entity::Book,
                id: book.isbn.to_string(),
            });
        }
        if !genres.contains(&book.genre) {
            return Err(Error::UnknownGenre(book.genre));
        }
        book.available_copies = book.total_copies;
        self.order.push(book.isbn.clone());
        self.entries.insert(book.isbn.clone(), book);
        Ok(())
    }

    /// Apply a partial update.
    ///
    /// Every supplied field is validated before any field is written:
    /// a bad genre or an impossible total leaves the record untouched.
    /// When `total_copies` changes, `available_copies` shifts by the same
    /// delta so the on-loan count is preserved; the change is refused
    /// with [`Error::CapacityViolation`] when the new total is below the
    /// on-loan count.
    pub fn update(&mut self, isbn: &Isbn, patch: &BookPatch, genres: &GenreSet) -> Result<()> {
        let book = self.entries.get_mut(isbn).ok_or_else(|| Error::NotFound {
            entity: Entity::Book,
            id: isbn.to_string(),
        })?;

        if let Some(genre) = patch.genre.as_deref() {
            if !genres.contains(genre) {
                return Err(Error::UnknownGenre(genre.to_string()));
            }
        }
        let resize = match patch.total_copies {
            Some(new_total) => {
                let outstanding = book.total_copies - book.available_copies;
                if new_total < outstanding {
                    return Err(Error::CapacityViolation {
                        isbn: isbn.clone(),
                        requested: new_total,
                        outstanding,
                    });
                }
                Some((new_total, outstanding))
            }
            None => None,
        };

        if let Some(title) = &patch.title {
            book.title = title.clone();
        }
        if let Some(author) = &patch.author {
            book.author = author.clone();
        }
        if let Some(genre) = &patch.genre {
            book.genre = genre.clone();
        }
        if let Some((new_total, outstanding)) = resize {
            book.total_copies = new_total;
            book.available_copies = new_total - outstanding;
        }
        Ok(())
    }

    /// Remove a record.
    ///
    /// Fails with [`Error::NotFound`] for an absent ISBN and
    /// [`Error::HasOutstanding`] while any copy is on loan. Removal is
    /// atomic: the record either stays fully intact or is gone.
    pub fn remove(&mut self, isbn: &Isbn) -> Result<Book> {
        {
            let book = self.entries.get(isbn).ok_or_else(|| Error::NotFound {
                entity: Entity::Book,
                id: isbn.to_string(),
            })?;
            if book.available_copies != book.total_copies {
                return Err(Error::HasOutstanding {
                    entity: Entity::Book,
                    id: isbn.to_string(),
                });
            }
        }
        self.order.retain(|i| i != isbn);
        self.entries.remove(isbn).ok_or_else(|| Error::NotFound {
            entity: Entity::Book,
            id: isbn.to_string(),
        })
    }

    /// Case-insensitive substring search over title OR author.
    ///
    /// Recomputed on every call; results are owned clones in catalog
    /// insertion order.
    pub fn search(&self, query: &str) -> Vec<Book> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
