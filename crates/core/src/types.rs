//! Core types for the circulation database
//!
//! This module defines the fundamental types used throughout the system:
//! - [`Isbn`] / [`MemberId`]: the keys of the two owning collections
//! - [`Book`] / [`Member`]: the records themselves
//! - [`LibraryStats`]: whole-library counters for reporting

use serde::{Deserialize, Serialize};

/// Maximum number of books a member may hold at once.
///
/// Checkout is refused once a member's borrowed list reaches this size;
/// the list shrinks again on return.
pub const MAX_BORROW: usize = 3;

/// Unique identifier for a catalog entry (the book's ISBN).
///
/// ISBNs are caller-supplied opaque strings; the catalog enforces
/// uniqueness but performs no format validation.
///
/// # Examples
///
/// ```
/// use circ_core::Isbn;
///
/// let a = Isbn::from("978-0545010221");
/// let b = Isbn::from("978-0545010221".to_string());
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "978-0545010221");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    /// Create an Isbn from anything string-like
    pub fn new(isbn: impl Into<String>) -> Self {
        Isbn(isbn.into())
    }

    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Isbn {
    fn from(s: &str) -> Self {
        Isbn(s.to_string())
    }
}

impl From<String> for Isbn {
    fn from(s: String) -> Self {
        Isbn(s)
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a roster entry.
///
/// Like [`Isbn`], member ids are caller-supplied opaque strings
/// (e.g. `"M001"`); the roster enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Create a MemberId from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        MemberId(id.into())
    }

    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        MemberId(s.to_string())
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        MemberId(s)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog record.
///
/// Copy counts obey `available_copies <= total_copies` at all times;
/// the difference is the number of copies currently on loan across the
/// whole roster. Queries return owned clones of this record, never
/// references into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique catalog key
    pub isbn: Isbn,
    /// Title, matched case-insensitively by search
    pub title: String,
    /// Author, matched case-insensitively by search
    pub author: String,
    /// Genre name; must be a member of the library's closed genre set
    pub genre: String,
    /// Copies owned by the library
    pub total_copies: u32,
    /// Copies currently on the shelf
    pub available_copies: u32,
}

impl Book {
    /// Number of copies currently on loan
    pub fn outstanding(&self) -> u32 {
        self.total_copies - self.available_copies
    }

    /// True if at least one copy is on the shelf
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// A roster record.
///
/// `borrowed` lists the ISBNs this member currently holds, in borrow
/// order, and never grows past [`MAX_BORROW`]. It holds identifiers,
/// not links to catalog records: the lending engine re-resolves each
/// ISBN against the catalog on every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique roster key
    pub member_id: MemberId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// ISBNs currently held, oldest borrow first
    pub borrowed: Vec<Isbn>,
}

impl Member {
    /// True if this member cannot borrow another book
    pub fn at_limit(&self) -> bool {
        self.borrowed.len() >= MAX_BORROW
    }

    /// True if this member currently holds the given ISBN
    pub fn holds(&self, isbn: &Isbn) -> bool {
        self.borrowed.contains(isbn)
    }
}

/// Whole-library counters, computed fresh on each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryStats {
    /// Number of catalog records
    pub book_count: usize,
    /// Number of roster records
    pub member_count: usize,
    /// Total copies owned across the catalog
    pub copies_total: u64,
    /// Copies currently on the shelf
    pub copies_available: u64,
    /// Copies currently on loan
    pub copies_on_loan: u64,
}
