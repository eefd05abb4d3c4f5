//! Surface handles for the unified API.
//!
//! Each surface exposes one concern of the library and delegates to
//! the shared engine:
//!
//! - [`Catalog`]: book records, via `lib.catalog`
//! - [`Roster`]: member records, via `lib.roster`
//! - [`Lending`]: borrow/return, via `lib.lending`
//! - [`Reports`]: read-only projections, via `lib.reports`

mod catalog;
mod lending;
mod reports;
mod roster;

pub use catalog::Catalog;
pub use lending::Lending;
pub use reports::Reports;
pub use roster::Roster;
