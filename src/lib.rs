//! # circdb
//!
//! Embedded in-memory circulation database for book lending.
//!
//! circdb manages a catalog of books and a roster of members, and
//! moves copies between them through a lending engine that enforces
//! availability and per-member limits. Everything lives in memory;
//! state starts from an optional seed file and ends with the process.
//!
//! ## Quick Start
//!
//! ```
//! use circdb::prelude::*;
//!
//! // An empty in-memory library
//! let lib = Library::ephemeral();
//!
//! // Catalog and roster
//! lib.catalog.add("978-1455555988", "The Martian", "Andy Weir", "Sci-Fi", 4)?;
//! lib.roster.add("M001", "Kadio Kele", "kele@example.com")?;
//!
//! // Lending
//! lib.lending.borrow("M001", "978-1455555988")?;
//! lib.lending.return_book("M001", "978-1455555988")?;
//!
//! // Reports
//! let hits = lib.catalog.search("martian");
//! assert_eq!(hits.len(), 1);
//! # Ok::<(), circdb::Error>(())
//! ```
//!
//! ## Surfaces
//!
//! - [`Catalog`] - book records: add, search, update, delete
//! - [`Roster`] - member records: add, update, delete
//! - [`Lending`] - borrow and return under the copy and limit rules
//! - [`Reports`] - read-only projections for listing and reporting
//!
//! ## Failure model
//!
//! Every operation returns `Result`; a refused operation (duplicate
//! identifier, unknown genre, exhausted availability, borrow limit,
//! outstanding loans) reports a typed [`Error`] and leaves state
//! untouched. Nothing panics, nothing is partially applied.

#![warn(missing_docs)]

mod error;
mod library;
mod surfaces;

pub mod prelude;

// Re-export main entry points
pub use library::{Library, LibraryBuilder};

// Re-export the canonical error type
pub use error::{Entity, Error, Result};

// Re-export surfaces
pub use surfaces::{Catalog, Lending, Reports, Roster};

// Re-export core vocabulary
pub use circ_core::{
    Book, BookPatch, GenreSet, Isbn, LibraryStats, Member, MemberId, MemberPatch, DEFAULT_GENRES,
    MAX_BORROW,
};

// Re-export the seed types
pub use circ_engine::{LibrarySeed, SeedBook, SeedMember};
