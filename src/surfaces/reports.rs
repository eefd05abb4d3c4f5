//! Reports surface.
//!
//! Read-only projections over current committed state. Nothing here
//! mutates, and nothing is cached: every call recomputes from the
//! collections and returns owned snapshots.

use crate::error::Result;
use circ_core::{Book, MemberId};
use circ_engine::LibraryCore;
use std::sync::Arc;

/// Read-only reports.
///
/// Access via `lib.reports`.
pub struct Reports {
    core: Arc<LibraryCore>,
}

impl Reports {
    pub(crate) fn new(core: Arc<LibraryCore>) -> Self {
        Self { core }
    }

    /// The books a member currently holds, in borrow order, with
    /// titles resolved against the catalog.
    pub fn loans_of(&self, member_id: &str) -> Result<Vec<Book>> {
        self.core.loans_of(&MemberId::from(member_id))
    }

    /// Books with at least one copy on the shelf.
    pub fn available(&self) -> Vec<Book> {
        self.core.available_books()
    }

    /// Books whose every copy is out on loan.
    pub fn exhausted(&self) -> Vec<Book> {
        self.core.exhausted_books()
    }
}
