//! Seed/config source
//!
//! A library is optionally initialized from a TOML seed supplying the
//! closed genre set and the starting catalog/roster records. The seed
//! is read once at open time and never consulted again; the engine
//! keeps no handle to the file.
//!
//! ```toml
//! genres = ["Fiction", "Sci-Fi"]
//!
//! [[books]]
//! isbn = "978-1455555988"
//! title = "The Martian"
//! author = "Andy Weir"
//! genre = "Sci-Fi"
//! total_copies = 4
//!
//! [[members]]
//! id = "M001"
//! name = "Kadio Kele"
//! email = "kele@example.com"
//! ```

use circ_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial records and genre set for a new library.
///
/// `genres = None` means the stock
/// [`DEFAULT_GENRES`](circ_core::DEFAULT_GENRES). Seeded books start
/// fully available and seeded members start holding nothing; the seed
/// format has no way to express an in-flight loan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibrarySeed {
    /// The closed genre set, or `None` for the default set
    pub genres: Option<Vec<String>>,
    /// Starting catalog records
    #[serde(default)]
    pub books: Vec<SeedBook>,
    /// Starting roster records
    #[serde(default)]
    pub members: Vec<SeedMember>,
}

/// One catalog record in a seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedBook {
    /// Catalog key
    pub isbn: String,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Genre; must belong to the seed's genre set
    pub genre: String,
    /// Copies owned; the record starts with all of them available
    pub total_copies: u32,
}

/// One roster record in a seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMember {
    /// Roster key
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl LibrarySeed {
    /// Load a seed from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a seed from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Seed(e.to_string()))
    }

    /// True if the seed contributes no records and no genre override.
    pub fn is_empty(&self) -> bool {
        self.genres.is_none() && self.books.is_empty() && self.members.is_empty()
    }
}
