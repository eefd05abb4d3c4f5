//! Unified error type for the circulation database.
//!
//! Every operation surfaces failure as a value of this enum; nothing in
//! the core panics or prints. The presentation layer owns translating a
//! variant into a user-facing message.

use crate::types::{Isbn, MemberId};
use thiserror::Error;

/// Which collection an identifier belongs to.
///
/// Used by the identifier-shaped variants ([`Error::Duplicate`],
/// [`Error::NotFound`], [`Error::HasOutstanding`]) so one variant serves
/// both the catalog and the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A catalog record, keyed by ISBN
    Book,
    /// A roster record, keyed by member id
    Member,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Book => write!(f, "book"),
            Entity::Member => write!(f, "member"),
        }
    }
}

/// All circulation errors.
///
/// This is the canonical error type for every catalog, roster, and
/// lending operation. Failures are always recovered at the call
/// boundary and returned; no error unwinds across component boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// Add refused: the identifier is already in use
    #[error("duplicate {entity}: {id}")]
    Duplicate {
        /// Collection the identifier belongs to
        entity: Entity,
        /// The conflicting identifier
        id: String,
    },

    /// Genre is not a member of the closed genre set
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    /// Operation target does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Collection that was searched
        entity: Entity,
        /// The missing identifier
        id: String,
    },

    /// Total copies cannot shrink below the number currently on loan
    #[error("cannot set {isbn} to {requested} copies: {outstanding} on loan")]
    CapacityViolation {
        /// The book being resized
        isbn: Isbn,
        /// The requested new total
        requested: u32,
        /// Copies currently on loan
        outstanding: u32,
    },

    /// Member already holds the maximum number of books
    #[error("member {member} is at the borrow limit of {limit}")]
    LimitExceeded {
        /// The member at the limit
        member: MemberId,
        /// The limit that was hit
        limit: usize,
    },

    /// No copies of the book are on the shelf
    #[error("no copies of {0} available")]
    Unavailable(Isbn),

    /// Return refused: the member does not hold that ISBN
    #[error("member {member} does not hold {isbn}")]
    NotHeld {
        /// The returning member
        member: MemberId,
        /// The ISBN that is not in their borrowed list
        isbn: Isbn,
    },

    /// Delete refused: loans are outstanding (book has copies out, or
    /// member still holds books)
    #[error("{entity} {id} has outstanding loans")]
    HasOutstanding {
        /// Collection the record belongs to
        entity: Entity,
        /// The record that cannot be deleted
        id: String,
    },

    /// Seed/config input could not be parsed or failed validation
    #[error("invalid seed: {0}")]
    Seed(String),

    /// I/O failure reading a seed file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for circulation operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a duplicate-identifier error.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::Duplicate { .. })
    }

    /// Check if this failure came from a lending rule rather than a
    /// missing or duplicate record.
    pub fn is_lending_rule(&self) -> bool {
        matches!(
            self,
            Error::LimitExceeded { .. }
                | Error::Unavailable(_)
                | Error::NotHeld { .. }
                | Error::CapacityViolation { .. }
                | Error::HasOutstanding { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity() {
        let err = Error::NotFound {
            entity: Entity::Book,
            id: "978-x".to_string(),
        };
        assert_eq!(err.to_string(), "book not found: 978-x");
        assert!(err.is_not_found());

        let err = Error::Duplicate {
            entity: Entity::Member,
            id: "M001".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate member: M001");
        assert!(err.is_duplicate());
    }

    #[test]
    fn lending_rules_are_distinguishable() {
        let err = Error::Unavailable(Isbn::from("978-x"));
        assert!(err.is_lending_rule());
        assert!(!err.is_not_found());

        let err = Error::UnknownGenre("Cooking".to_string());
        assert!(!err.is_lending_rule());
    }
}
