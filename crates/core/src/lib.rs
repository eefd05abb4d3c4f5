//! Core domain types for the circulation database.
//!
//! This crate defines the vocabulary shared by the engine, the unified
//! facade, and the CLI: record types, identifier newtypes, the closed
//! genre set, partial-update descriptors, and the canonical error enum.
//! It contains no state and no locking; the state machine lives in
//! `circ-engine`.

pub mod error;
pub mod genre;
pub mod patch;
pub mod types;

pub use error::{Entity, Error, Result};
pub use genre::{GenreSet, DEFAULT_GENRES};
pub use patch::{BookPatch, MemberPatch};
pub use types::{Book, Isbn, LibraryStats, Member, MemberId, MAX_BORROW};
