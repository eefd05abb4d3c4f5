//! Lending surface.
//!
//! Borrow and return are the only operations that touch both
//! collections; the engine performs each one inside a single critical
//! section, so a copy count and a borrowed list are never observed out
//! of step with each other.
//!
//! # Example
//!
//! ```
//! use circdb::prelude::*;
//!
//! let lib = Library::ephemeral();
//! lib.catalog.add("978-1", "The Martian", "Andy Weir", "Sci-Fi", 1)?;
//! lib.roster.add("M001", "Kadio", "kadio@example.com")?;
//!
//! lib.lending.borrow("M001", "978-1")?;
//! assert!(lib.lending.borrow("M001", "978-1").is_err()); // no copies left
//! lib.lending.return_book("M001", "978-1")?;
//! # Ok::<(), circdb::Error>(())
//! ```

use crate::error::Result;
use circ_core::{Isbn, MemberId};
use circ_engine::LibraryCore;
use std::sync::Arc;

/// Lending operations.
///
/// Access via `lib.lending`.
pub struct Lending {
    core: Arc<LibraryCore>,
}

impl Lending {
    pub(crate) fn new(core: Arc<LibraryCore>) -> Self {
        Self { core }
    }

    /// Check a book out to a member.
    ///
    /// Preconditions in order, first failure wins: member exists, book
    /// exists, member below the borrow limit, a copy is available. A
    /// failed borrow is terminal for this call; nothing is queued.
    pub fn borrow(&self, member_id: &str, isbn: &str) -> Result<()> {
        self.core.borrow(&MemberId::from(member_id), &Isbn::from(isbn))
    }

    /// Take a book back from a member.
    ///
    /// Fails if the member or book is unknown, or if the member does
    /// not currently hold that ISBN.
    pub fn return_book(&self, member_id: &str, isbn: &str) -> Result<()> {
        self.core
            .return_book(&MemberId::from(member_id), &Isbn::from(isbn))
    }
}
