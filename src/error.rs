//! Error types for the unified API.
//!
//! The engine and the facade share one canonical error enum, defined
//! in `circ-core` and re-exported here so callers only ever name
//! `circdb::Error`.

pub use circ_core::{Entity, Error, Result};
