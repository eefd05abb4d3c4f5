//! The library engine: both collections behind one critical section
//!
//! [`LibraryCore`] owns the catalog and the roster together under a
//! single `RwLock`, so a lending operation's read-check-then-write over
//! a book's copy count and a member's borrowed list is atomic: no
//! interleaving can observe one mutation without the other, and two
//! concurrent borrowers can never both pass the availability check.
//!
//! Every operation is synchronous and runs to completion while holding
//! the lock; there are no internal suspension points. Queries clone the
//! records they return, so no reference into the locked state ever
//! escapes.

use circ_core::{
    Book, BookPatch, Entity, Error, GenreSet, Isbn, LibraryStats, Member, MemberId, MemberPatch,
    Result, MAX_BORROW,
};
use parking_lot::RwLock;

use crate::catalog::CatalogState;
use crate::roster::RosterState;
use crate::seed::LibrarySeed;

/// Both owning collections, guarded as one unit.
#[derive(Debug, Default)]
struct LibraryState {
    catalog: CatalogState,
    roster: RosterState,
}

/// The circulation engine.
///
/// Holds the catalog, the roster, and the immutable genre set, and
/// implements every mutating and querying operation. Wrap it in an
/// `Arc` to share between surface handles.
///
/// # Example
///
/// ```
/// use circ_engine::LibraryCore;
/// use circ_core::{GenreSet, Isbn, MemberId};
///
/// let core = LibraryCore::new(GenreSet::default());
/// core.add_book(Isbn::from("978-1"), "The Martian", "Andy Weir", "Sci-Fi", 2)?;
/// core.add_member(MemberId::from("M001"), "Kadio", "kadio@example.com")?;
/// core.borrow(&MemberId::from("M001"), &Isbn::from("978-1"))?;
/// assert_eq!(core.book(&Isbn::from("978-1")).unwrap().available_copies, 1);
/// # Ok::<(), circ_core::Error>(())
/// ```
#[derive(Debug)]
pub struct LibraryCore {
    state: RwLock<LibraryState>,
    /// Validation oracle for book genres; fixed at construction
    genres: GenreSet,
}

impl LibraryCore {
    /// Create an empty library with the given genre set.
    pub fn new(genres: GenreSet) -> Self {
        LibraryCore {
            state: RwLock::new(LibraryState::default()),
            genres,
        }
    }

    /// Build a library from a seed: genre set plus initial records.
    ///
    /// Seed records go through the normal add paths, so a duplicate
    /// ISBN, duplicate member id, or out-of-set genre rejects the whole
    /// seed with the same error the live operation would produce.
    pub fn from_seed(seed: LibrarySeed) -> Result<Self> {
        let genres = match seed.genres {
            Some(names) => GenreSet::new(names),
            None => GenreSet::default(),
        };
        let core = LibraryCore::new(genres);
        for book in seed.books {
            core.add_book(
                Isbn::from(book.isbn),
                book.title,
                book.author,
                book.genre,
                book.total_copies,
            )?;
        }
        for member in seed.members {
            core.add_member(MemberId::from(member.id), member.name, member.email)?;
        }
        Ok(core)
    }

    /// The library's closed genre set.
    pub fn genres(&self) -> &GenreSet {
        &self.genres
    }

    // =========================================================================
    // Catalog operations
    // =========================================================================

    /// Add a book; a new record starts fully available.
    pub fn add_book(
        &self,
        isbn: Isbn,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        total_copies: u32,
    ) -> Result<()> {
        let book = Book {
            isbn: isbn.clone(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            total_copies,
            available_copies: total_copies,
        };
        self.state.write().catalog.add(book, &self.genres)?;
        tracing::debug!(%isbn, "book added");
        Ok(())
    }

    /// Snapshot of a single book.
    pub fn book(&self, isbn: &Isbn) -> Option<Book> {
        self.state.read().catalog.get(isbn).cloned()
    }

    /// Snapshot of the whole catalog, in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.state.read().catalog.iter().cloned().collect()
    }

    /// Case-insensitive title/author search; recomputed per call.
    pub fn search_books(&self, query: &str) -> Vec<Book> {
        self.state.read().catalog.search(query)
    }

    /// Apply a partial update to a book (validate-all-then-commit-all).
    pub fn update_book(&self, isbn: &Isbn, patch: &BookPatch) -> Result<()> {
        self.state.write().catalog.update(isbn, patch, &self.genres)?;
        tracing::debug!(%isbn, "book updated");
        Ok(())
    }

    /// Delete a book; refused while any copy is on loan.
    pub fn remove_book(&self, isbn: &Isbn) -> Result<()> {
        self.state.write().catalog.remove(isbn)?;
        tracing::debug!(%isbn, "book removed");
        Ok(())
    }

    /// True if the catalog has this ISBN.
    pub fn contains_book(&self, isbn: &Isbn) -> bool {
        self.state.read().catalog.contains(isbn)
    }

    /// Number of catalog records.
    pub fn book_count(&self) -> usize {
        self.state.read().catalog.len()
    }

    // =========================================================================
    // Roster operations
    // =========================================================================

    /// Add a member; a new record holds nothing.
    pub fn add_member(
        &self,
        member_id: MemberId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<()> {
        let member = Member {
            member_id: member_id.clone(),
            name: name.into(),
            email: email.into(),
            borrowed: Vec::new(),
        };
        self.state.write().roster.add(member)?;
        tracing::debug!(%member_id, "member added");
        Ok(())
    }

    /// Snapshot of a single member.
    pub fn member(&self, member_id: &MemberId) -> Option<Member> {
        self.state.read().roster.get(member_id).cloned()
    }

    /// Snapshot of the whole roster, in insertion order.
    pub fn members(&self) -> Vec<Member> {
        self.state.read().roster.iter().cloned().collect()
    }

    /// Apply a partial update to a member's contact details.
    pub fn update_member(&self, member_id: &MemberId, patch: &MemberPatch) -> Result<()> {
        self.state.write().roster.update(member_id, patch)?;
        tracing::debug!(%member_id, "member updated");
        Ok(())
    }

    /// Delete a member; refused while they hold any book.
    pub fn remove_member(&self, member_id: &MemberId) -> Result<()> {
        self.state.write().roster.remove(member_id)?;
        tracing::debug!(%member_id, "member removed");
        Ok(())
    }

    /// True if the roster has this member id.
    pub fn contains_member(&self, member_id: &MemberId) -> bool {
        self.state.read().roster.contains(member_id)
    }

    /// Number of roster records.
    pub fn member_count(&self) -> usize {
        self.state.read().roster.len()
    }

    // =========================================================================
    // Lending operations
    // =========================================================================

    /// Check a book out to a member.
    ///
    /// Preconditions, checked in order with the first failure winning:
    /// member exists, book exists, member below [`MAX_BORROW`], at least
    /// one copy available. On success the ISBN is appended to the
    /// member's borrowed list and the available count drops by one,
    /// under the same lock acquisition.
    pub fn borrow(&self, member_id: &MemberId, isbn: &Isbn) -> Result<()> {
        let mut guard = self.state.write();
        let LibraryState { catalog, roster } = &mut *guard;

        let member = roster.get_mut(member_id).ok_or_else(|| Error::NotFound {
            entity: Entity::Member,
            id: member_id.to_string(),
        })?;
        let book = catalog.get_mut(isbn).ok_or_else(|| Error::NotFound {
            entity: Entity::Book,
            id: isbn.to_string(),
        })?;
        if member.borrowed.len() >= MAX_BORROW {
            return Err(Error::LimitExceeded {
                member: member_id.clone(),
                limit: MAX_BORROW,
            });
        }
        if book.available_copies == 0 {
            return Err(Error::Unavailable(isbn.clone()));
        }

        member.borrowed.push(isbn.clone());
        book.available_copies -= 1;
        tracing::debug!(%member_id, %isbn, available = book.available_copies, "book borrowed");
        Ok(())
    }

    /// Take a book back from a member.
    ///
    /// Preconditions: member exists, book exists, and the member holds
    /// that ISBN. The earliest-borrowed occurrence leaves the list and
    /// the available count rises by one, under the same lock
    /// acquisition. A failed return has no effect and fails the same
    /// way if retried.
    pub fn return_book(&self, member_id: &MemberId, isbn: &Isbn) -> Result<()> {
        let mut guard = self.state.write();
        let LibraryState { catalog, roster } = &mut *guard;

        let member = roster.get_mut(member_id).ok_or_else(|| Error::NotFound {
            entity: Entity::Member,
            id: member_id.to_string(),
        })?;
        let book = catalog.get_mut(isbn).ok_or_else(|| Error::NotFound {
            entity: Entity::Book,
            id: isbn.to_string(),
        })?;
        let position = member
            .borrowed
            .iter()
            .position(|held| held == isbn)
            .ok_or_else(|| Error::NotHeld {
                member: member_id.clone(),
                isbn: isbn.clone(),
            })?;

        member.borrowed.remove(position);
        book.available_copies += 1;
        tracing::debug!(%member_id, %isbn, available = book.available_copies, "book returned");
        Ok(())
    }

    // =========================================================================
    // Queries and reports
    // =========================================================================

    /// The books a member currently holds, resolved against the
    /// catalog, in borrow order.
    pub fn loans_of(&self, member_id: &MemberId) -> Result<Vec<Book>> {
        let state = self.state.read();
        let member = state.roster.get(member_id).ok_or_else(|| Error::NotFound {
            entity: Entity::Member,
            id: member_id.to_string(),
        })?;
        Ok(member
            .borrowed
            .iter()
            .filter_map(|isbn| state.catalog.get(isbn))
            .cloned()
            .collect())
    }

    /// Books with at least one copy on the shelf.
    pub fn available_books(&self) -> Vec<Book> {
        self.state
            .read()
            .catalog
            .iter()
            .filter(|book| book.is_available())
            .cloned()
            .collect()
    }

    /// Books whose every copy is out.
    pub fn exhausted_books(&self) -> Vec<Book> {
        self.state
            .read()
            .catalog
            .iter()
            .filter(|book| !book.is_available())
            .cloned()
            .collect()
    }

    /// Whole-library counters, computed from current state.
    pub fn stats(&self) -> LibraryStats {
        let state = self.state.read();
        let mut copies_total = 0u64;
        let mut copies_available = 0u64;
        for book in state.catalog.iter() {
            copies_total += u64::from(book.total_copies);
            copies_available += u64::from(book.available_copies);
        }
        LibraryStats {
            book_count: state.catalog.len(),
            member_count: state.roster.len(),
            copies_total,
            copies_available,
            copies_on_loan: copies_total - copies_available,
        }
    }
}
