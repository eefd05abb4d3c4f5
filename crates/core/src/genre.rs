//! The closed genre set
//!
//! Genres are a fixed, immutable enumeration used purely as a validation
//! oracle for [`Book::genre`](crate::Book). The set is supplied by the
//! seed/config source at open time and never changes afterwards.

use serde::{Deserialize, Serialize};

/// Genres a library accepts when none are configured.
///
/// Taken from the stock seed data shipped with the system.
pub const DEFAULT_GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Sci-Fi",
    "Biography",
    "Mystery",
    "History",
    "Historical Fiction",
];

/// An immutable, closed set of genre names.
///
/// Membership is an exact, case-sensitive match. Construction
/// deduplicates while preserving first-seen order so the set displays
/// the way it was configured.
///
/// # Examples
///
/// ```
/// use circ_core::GenreSet;
///
/// let genres = GenreSet::new(["Fiction", "Sci-Fi", "Fiction"]);
/// assert_eq!(genres.len(), 2);
/// assert!(genres.contains("Sci-Fi"));
/// assert!(!genres.contains("sci-fi"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreSet {
    names: Vec<String>,
}

impl GenreSet {
    /// Build a genre set from an ordered list of names, dropping duplicates
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        GenreSet { names: out }
    }

    /// True if `genre` is a member of the set
    pub fn contains(&self, genre: &str) -> bool {
        self.names.iter().any(|n| n == genre)
    }

    /// The configured genre names, in configuration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of genres in the set
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for GenreSet {
    fn default() -> Self {
        GenreSet::new(DEFAULT_GENRES.iter().copied())
    }
}
