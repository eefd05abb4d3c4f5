//! Main entry point for circdb.
//!
//! This module provides the `Library` struct, the primary entry point
//! for all circulation operations, and its builder.

use crate::error::Result;
use crate::surfaces::{Catalog, Lending, Reports, Roster};
use circ_core::{GenreSet, LibraryStats};
use circ_engine::{LibraryCore, LibrarySeed};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The circulation database.
///
/// This is the main entry point for all operations. Create a library
/// using [`Library::open`], [`Library::ephemeral`], or
/// [`Library::builder`], then work through the per-concern surfaces.
///
/// # Example
///
/// ```
/// use circdb::prelude::*;
///
/// let lib = Library::ephemeral();
///
/// lib.catalog.add("978-1455555988", "The Martian", "Andy Weir", "Sci-Fi", 4)?;
/// lib.roster.add("M001", "Kadio Kele", "kele@example.com")?;
/// lib.lending.borrow("M001", "978-1455555988")?;
///
/// assert_eq!(lib.catalog.get("978-1455555988").unwrap().available_copies, 3);
/// # Ok::<(), circdb::Error>(())
/// ```
pub struct Library {
    /// The underlying engine
    pub(crate) inner: Arc<LibraryCore>,

    /// Catalog operations (books)
    pub catalog: Catalog,

    /// Roster operations (members)
    pub roster: Roster,

    /// Lending operations (borrow / return)
    pub lending: Lending,

    /// Read-only reports and projections
    pub reports: Reports,
}

impl Library {
    /// Open a library seeded from a TOML file.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let lib = Library::open("./seed.toml")?;
    /// ```
    pub fn open(seed_path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().seed_file(seed_path).open()
    }

    /// Create an empty in-memory library with the default genre set.
    ///
    /// Nothing is read or written on disk. Use this for unit tests and
    /// for callers that seed programmatically; multiple independent
    /// instances can coexist.
    pub fn ephemeral() -> Self {
        Self::from_core(Arc::new(LibraryCore::new(GenreSet::default())))
    }

    /// Create a builder for library configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let lib = Library::builder()
    ///     .seed_file("./seed.toml")
    ///     .open()?;
    /// ```
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// The configured genre names, in configuration order.
    pub fn genres(&self) -> Vec<String> {
        self.inner.genres().names().to_vec()
    }

    /// Whole-library counters, computed from current committed state.
    pub fn stats(&self) -> LibraryStats {
        self.inner.stats()
    }

    /// Wire the surface handles over a shared engine.
    fn from_core(core: Arc<LibraryCore>) -> Self {
        Self {
            catalog: Catalog::new(core.clone()),
            roster: Roster::new(core.clone()),
            lending: Lending::new(core.clone()),
            reports: Reports::new(core.clone()),
            inner: core,
        }
    }
}

/// Builder for library configuration.
///
/// A seed can come from a TOML file, from an in-code [`LibrarySeed`],
/// or be omitted entirely for an empty library. An explicit
/// [`genres`](LibraryBuilder::genres) call overrides whatever genre
/// set the seed carries.
///
/// # Example
///
/// ```
/// use circdb::prelude::*;
///
/// let lib = Library::builder()
///     .genres(["Fiction", "Poetry"])
///     .open()?;
/// assert_eq!(lib.genres(), vec!["Fiction", "Poetry"]);
/// # Ok::<(), circdb::Error>(())
/// ```
pub struct LibraryBuilder {
    seed_path: Option<PathBuf>,
    seed: Option<LibrarySeed>,
    genres: Option<Vec<String>>,
}

impl LibraryBuilder {
    /// Create a new builder with no seed and the default genre set.
    pub fn new() -> Self {
        Self {
            seed_path: None,
            seed: None,
            genres: None,
        }
    }

    /// Seed from a TOML file at open time.
    pub fn seed_file(mut self, path: impl AsRef<Path>) -> Self {
        self.seed_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Seed from an in-code value; takes precedence over `seed_file`.
    pub fn seed(mut self, seed: LibrarySeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use an explicit genre set, overriding the seed's.
    pub fn genres<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Open the library.
    ///
    /// Fails if a seed file cannot be read or parsed, or if any seed
    /// record fails the same validation a live operation would apply
    /// (duplicate identifier, out-of-set genre).
    pub fn open(self) -> Result<Library> {
        let mut seed = match (self.seed, self.seed_path) {
            (Some(seed), _) => seed,
            (None, Some(path)) => LibrarySeed::from_file(path)?,
            (None, None) => LibrarySeed::default(),
        };
        if let Some(genres) = self.genres {
            seed.genres = Some(genres);
        }
        let core = LibraryCore::from_seed(seed)?;
        Ok(Library::from_core(Arc::new(core)))
    }
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
