//! Partial-update descriptors
//!
//! Updates carry an explicit optional-field structure rather than a loose
//! field map, so the set of mutable fields is statically enumerable. A
//! field left as `None` is untouched. Patches apply
//! validate-all-then-commit-all: if any supplied field fails validation,
//! nothing is written.

use serde::{Deserialize, Serialize};

/// Fields of a catalog record that may change after creation.
///
/// # Examples
///
/// ```
/// use circ_core::BookPatch;
///
/// let patch = BookPatch::new()
///     .title("The Martian (Movie Tie-In)")
///     .total_copies(6);
/// assert!(patch.author.is_none());
/// assert_eq!(patch.total_copies, Some(6));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPatch {
    /// New title, if changing
    pub title: Option<String>,
    /// New author, if changing
    pub author: Option<String>,
    /// New genre, if changing; re-validated against the closed genre set
    pub genre: Option<String>,
    /// New total copy count, if changing; available copies shift by the
    /// same delta, and the change is refused when the new total is below
    /// the number of copies currently on loan
    pub total_copies: Option<u32>,
}

impl BookPatch {
    /// An empty patch (touches nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title field
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author field
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the genre field
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the total copy count
    pub fn total_copies(mut self, total: u32) -> Self {
        self.total_copies = Some(total);
        self
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.total_copies.is_none()
    }
}

/// Fields of a roster record that may change after creation.
///
/// Only contact details are mutable; the borrowed list moves exclusively
/// through the lending engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPatch {
    /// New display name, if changing
    pub name: Option<String>,
    /// New contact email, if changing
    pub email: Option<String>,
}

impl MemberPatch {
    /// An empty patch (touches nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name field
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email field
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_patch_builder_sets_only_named_fields() {
        let patch = BookPatch::new().genre("Mystery");
        assert_eq!(patch.genre.as_deref(), Some("Mystery"));
        assert!(patch.title.is_none());
        assert!(patch.author.is_none());
        assert!(patch.total_copies.is_none());
    }

    #[test]
    fn empty_patches_report_empty() {
        assert!(BookPatch::new().is_empty());
        assert!(MemberPatch::new().is_empty());
        assert!(!BookPatch::new().total_copies(0).is_empty());
        assert!(!MemberPatch::new().email("a@b.c").is_empty());
    }
}
