//! Roster surface.
//!
//! Member CRUD over the shared engine. The borrowed list on a member
//! snapshot is read-only information; it only ever changes through
//! `lib.lending`.

use crate::error::Result;
use circ_core::{Member, MemberId, MemberPatch};
use circ_engine::LibraryCore;
use std::sync::Arc;

/// Roster operations.
///
/// Access via `lib.roster`.
pub struct Roster {
    core: Arc<LibraryCore>,
}

impl Roster {
    pub(crate) fn new(core: Arc<LibraryCore>) -> Self {
        Self { core }
    }

    /// Add a member.
    ///
    /// Fails on a duplicate member id. A new member holds nothing.
    pub fn add(&self, member_id: &str, name: &str, email: &str) -> Result<()> {
        self.core.add_member(MemberId::from(member_id), name, email)
    }

    /// Get a snapshot of one member.
    ///
    /// Returns `None` if the id isn't on the roster.
    pub fn get(&self, member_id: &str) -> Option<Member> {
        self.core.member(&MemberId::from(member_id))
    }

    /// Update a member's contact details.
    pub fn update(&self, member_id: &str, patch: MemberPatch) -> Result<()> {
        self.core.update_member(&MemberId::from(member_id), &patch)
    }

    /// Delete a member.
    ///
    /// Refused while the member still holds books.
    pub fn remove(&self, member_id: &str) -> Result<()> {
        self.core.remove_member(&MemberId::from(member_id))
    }

    /// Snapshot of every member, in insertion order.
    pub fn list(&self) -> Vec<Member> {
        self.core.members()
    }

    /// True if the roster has this member id.
    pub fn contains(&self, member_id: &str) -> bool {
        self.core.contains_member(&MemberId::from(member_id))
    }

    /// Number of roster records.
    pub fn len(&self) -> usize {
        self.core.member_count()
    }

    /// True if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.core.member_count() == 0
    }
}
