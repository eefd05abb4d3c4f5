//! Convenient imports for circdb.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```
//! use circdb::prelude::*;
//!
//! let lib = Library::ephemeral();
//! lib.catalog.add("978-1", "Title", "Author", "Fiction", 1)?;
//! # Ok::<(), circdb::Error>(())
//! ```

// Main entry point
pub use crate::library::{Library, LibraryBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Records and identifiers
pub use circ_core::{Book, Isbn, Member, MemberId};

// Partial updates
pub use circ_core::{BookPatch, MemberPatch};

// Seed/config source
pub use circ_engine::{LibrarySeed, SeedBook, SeedMember};

// Limits and reporting
pub use circ_core::{LibraryStats, MAX_BORROW};
