//! Roster state: the keyed collection of member records
//!
//! The roster exclusively owns every [`Member`] record, keyed by member
//! id. Each record carries the member's borrowed list; the list itself
//! is only ever mutated by the lending operations on
//! [`LibraryCore`](crate::LibraryCore), which hold the lock covering
//! both collections.

use circ_core::{Entity, Error, Member, MemberId, MemberPatch, Result};
use rustc_hash::FxHashMap;

/// The member collection.
#[derive(Debug, Default)]
pub struct RosterState {
    /// Records keyed by member id
    entries: FxHashMap<MemberId, Member>,
    /// Member ids in insertion order
    order: Vec<MemberId>,
}

impl RosterState {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the roster has no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if a member id is present
    pub fn contains(&self, member_id: &MemberId) -> bool {
        self.entries.contains_key(member_id)
    }

    /// Look up a record by member id
    pub fn get(&self, member_id: &MemberId) -> Option<&Member> {
        self.entries.get(member_id)
    }

    pub(crate) fn get_mut(&mut self, member_id: &MemberId) -> Option<&mut Member> {
        self.entries.get_mut(member_id)
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.order
            .iter()
            .filter_map(|member_id| self.entries.get(member_id))
    }

    /// Add a new record.
    ///
    /// Fails with [`Error::Duplicate`] on an existing id. A new member
    /// starts with an empty borrowed list regardless of what the caller
    /// passed in.
    pub fn add(&mut self, mut member: Member) -> Result<()> {
        if self.entries.contains_key(&member.member_id) {
            return Err(Error::Duplicate {
                entity: Entity::Member,
                id: member.member_id.to_string(),
            });
        }
        member.borrowed.clear();
        self.order.push(member.member_id.clone());
        self.entries.insert(member.member_id.clone(), member);
        Ok(())
    }

    /// Apply a partial update to contact details.
    ///
    /// Only name and email are mutable here; the borrowed list is owned
    /// by the lending operations.
    pub fn update(&mut self, member_id: &MemberId, patch: &MemberPatch) -> Result<()> {
        let member = self
            .entries
            .get_mut(member_id)
            .ok_or_else(|| Error::NotFound {
                entity: Entity::Member,
                id: member_id.to_string(),
            })?;
        if let Some(name) = &patch.name {
            member.name = name.clone();
        }
        if let Some(email) = &patch.email {
            member.email = email.clone();
        }
        Ok(())
    }

    /// Remove a record.
    ///
    /// Fails with [`Error::NotFound`] for an absent id and
    /// [`Error::HasOutstanding`] while the member still holds books.
    pub fn remove(&mut self, member_id: &MemberId) -> Result<Member> {
        {
            let member = self.entries.get(member_id).ok_or_else(|| Error::NotFound {
                entity: Entity::Member,
                id: member_id.to_string(),
            })?;
            if !member.borrowed.is_empty() {
                return Err(Error::HasOutstanding {
                    entity: Entity::Member,
                    id: member_id.to_string(),
                });
            }
        }
        self.order.retain(|id| id != member_id);
        self.entries
            .remove(member_id)
            .ok_or_else(|| Error::NotFound {
                entity: Entity::Member,
                id: member_id.to_string(),
            })
    }
}
