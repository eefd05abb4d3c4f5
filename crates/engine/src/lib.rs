//! The circulation state machine.
//!
//! This crate implements the engine behind the `circdb` facade: the
//! catalog and roster collections, the lending operations that mutate
//! both atomically, the read-only queries, and the seed loader. The
//! two collections live behind a single lock ([`LibraryCore`]), which
//! is the whole concurrency story: one critical section covering every
//! read-check-then-write.

pub mod catalog;
pub mod library;
pub mod roster;
pub mod seed;

pub use catalog::CatalogState;
pub use library::LibraryCore;
pub use roster::RosterState;
pub use seed::{LibrarySeed, SeedBook, SeedMember};
