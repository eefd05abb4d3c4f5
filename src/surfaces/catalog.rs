//! Catalog surface.
//!
//! Book CRUD and search over the shared engine.
//!
//! # Example
//!
//! ```
//! use circdb::prelude::*;
//!
//! let lib = Library::ephemeral();
//! lib.catalog.add("978-1", "Sapiens", "Yuval Noah Harari", "Non-Fiction", 8)?;
//!
//! let hits = lib.catalog.search("sapiens");
//! assert_eq!(hits.len(), 1);
//!
//! lib.catalog.update("978-1", BookPatch::new().total_copies(10))?;
//! assert_eq!(lib.catalog.get("978-1").unwrap().total_copies, 10);
//! # Ok::<(), circdb::Error>(())
//! ```

use crate::error::Result;
use circ_core::{Book, BookPatch, Isbn};
use circ_engine::LibraryCore;
use std::sync::Arc;

/// Catalog operations.
///
/// Access via `lib.catalog`.
pub struct Catalog {
    core: Arc<LibraryCore>,
}

impl Catalog {
    pub(crate) fn new(core: Arc<LibraryCore>) -> Self {
        Self { core }
    }

    /// Add a book.
    ///
    /// Fails on a duplicate ISBN or a genre outside the library's
    /// closed genre set. A new record starts fully available.
    pub fn add(
        &self,
        isbn: &str,
        title: &str,
        author: &str,
        genre: &str,
        total_copies: u32,
    ) -> Result<()> {
        self.core
            .add_book(Isbn::from(isbn), title, author, genre, total_copies)
    }

    /// Get a snapshot of one book.
    ///
    /// Returns `None` if the ISBN isn't in the catalog.
    pub fn get(&self, isbn: &str) -> Option<Book> {
        self.core.book(&Isbn::from(isbn))
    }

    /// Case-insensitive substring search over title OR author.
    ///
    /// Recomputed on each call; results are owned snapshots in catalog
    /// insertion order.
    pub fn search(&self, query: &str) -> Vec<Book> {
        self.core.search_books(query)
    }

    /// Apply a partial update.
    ///
    /// All supplied fields are validated before any is written; on
    /// failure the record is untouched.
    pub fn update(&self, isbn: &str, patch: BookPatch) -> Result<()> {
        self.core.update_book(&Isbn::from(isbn), &patch)
    }

    /// Delete a book.
    ///
    /// Refused while any copy is on loan.
    pub fn remove(&self, isbn: &str) -> Result<()> {
        self.core.remove_book(&Isbn::from(isbn))
    }

    /// Snapshot of every book, in insertion order.
    pub fn list(&self) -> Vec<Book> {
        self.core.books()
    }

    /// True if the catalog has this ISBN.
    pub fn contains(&self, isbn: &str) -> bool {
        self.core.contains_book(&Isbn::from(isbn))
    }

    /// Number of catalog records.
    pub fn len(&self) -> usize {
        self.core.book_count()
    }

    /// True if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.core.book_count() == 0
    }
}
