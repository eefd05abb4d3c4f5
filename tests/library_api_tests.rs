//! Unified API Surface Tests
//!
//! Facade-level tests for the `circdb` crate: lifecycle, the four
//! surfaces, and the end-to-end lending flows.

use circdb::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn stocked() -> Library {
    let lib = Library::ephemeral();
    lib.catalog
        .add("978-0545010221", "The Hitchhiker's Guide to the Galaxy", "Douglas Adams", "Sci-Fi", 10)
        .unwrap();
    lib.catalog
        .add("978-1455555988", "The Martian", "Andy Weir", "Sci-Fi", 4)
        .unwrap();
    lib.catalog
        .add("978-0345510366", "The Name of the Rose", "Umberto Eco", "Fiction", 7)
        .unwrap();
    lib.roster.add("M001", "Kadio Kele", "kele@example.com").unwrap();
    lib.roster.add("M002", "Mama Kele", "mama@example.com").unwrap();
    lib
}

// ============================================================================
// Lifecycle
// ============================================================================

mod lifecycle {
    use super::*;

    #[test]
    fn ephemeral_library_starts_empty_with_default_genres() {
        let lib = Library::ephemeral();
        assert!(lib.catalog.is_empty());
        assert!(lib.roster.is_empty());
        assert!(lib.genres().contains(&"Historical Fiction".to_string()));
    }

    #[test]
    fn instances_are_independent() {
        let a = Library::ephemeral();
        let b = Library::ephemeral();
        a.catalog.add("978-1", "T", "A", "Fiction", 1).unwrap();
        assert_eq!(a.catalog.len(), 1);
        assert!(b.catalog.is_empty());
    }

    #[test]
    fn open_loads_a_seed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[[books]]
isbn = "978-1"
title = "Sapiens"
author = "Yuval Noah Harari"
genre = "Non-Fiction"
total_copies = 8

[[members]]
id = "M001"
name = "Kadio Kele"
email = "kele@example.com"
"#,
        )
        .unwrap();

        let lib = Library::open(file.path()).unwrap();
        assert_eq!(lib.catalog.len(), 1);
        assert_eq!(lib.roster.len(), 1);
        assert_eq!(lib.catalog.get("978-1").unwrap().available_copies, 8);
    }

    #[test]
    fn open_rejects_a_seed_with_a_bad_genre() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[[books]]
isbn = "978-1"
title = "T"
author = "A"
genre = "NotAGenre"
total_copies = 1
"#,
        )
        .unwrap();
        assert!(Library::open(file.path()).is_err());
    }

    #[test]
    fn builder_seed_and_genre_override() {
        let lib = Library::builder()
            .seed(LibrarySeed {
                genres: Some(vec!["Fiction".to_string()]),
                books: vec![],
                members: vec![],
            })
            .genres(["Poetry"])
            .open()
            .unwrap();
        assert_eq!(lib.genres(), vec!["Poetry"]);
        assert!(lib.catalog.add("978-1", "T", "A", "Fiction", 1).is_err());
        assert!(lib.catalog.add("978-1", "T", "A", "Poetry", 1).is_ok());
    }
}

// ============================================================================
// Catalog surface
// ============================================================================

mod catalog {
    use super::*;

    #[test]
    fn add_then_get_round_trips() {
        let lib = Library::ephemeral();
        assert!(lib.catalog.add("978-X", "T", "A", "Fiction", 3).is_ok());
        let book = lib.catalog.get("978-X").unwrap();
        assert_eq!(book.available_copies, 3);
        assert_eq!(book.total_copies, 3);
    }

    #[test]
    fn duplicate_add_fails_and_state_is_unchanged() {
        let lib = Library::ephemeral();
        lib.catalog.add("978-X", "T", "A", "Fiction", 3).unwrap();
        let err = lib.catalog.add("978-X", "Other", "B", "Fiction", 9).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(lib.catalog.len(), 1);
        assert_eq!(lib.catalog.get("978-X").unwrap().title, "T");
    }

    #[test]
    fn add_with_invalid_genre_leaves_catalog_size_unchanged() {
        let lib = stocked();
        let before = lib.catalog.len();
        assert!(lib.catalog.add("978-9", "T", "A", "NotAGenre", 1).is_err());
        assert_eq!(lib.catalog.len(), before);
        assert!(!lib.catalog.contains("978-9"));
    }

    #[test]
    fn search_matches_title_or_author_case_insensitively() {
        let lib = stocked();
        assert_eq!(lib.catalog.search("the").len(), 3);
        assert_eq!(lib.catalog.search("ADAMS").len(), 1);
        assert_eq!(lib.catalog.search("martian").len(), 1);
        assert!(lib.catalog.search("dune").is_empty());
    }

    #[test]
    fn update_rejecting_total_below_outstanding_changes_nothing() {
        let lib = stocked();
        lib.lending.borrow("M001", "978-1455555988").unwrap();
        lib.lending.borrow("M002", "978-1455555988").unwrap(); // 2 of 4 out

        let err = lib
            .catalog
            .update("978-1455555988", BookPatch::new().total_copies(1).title("X"))
            .unwrap_err();
        assert!(err.is_lending_rule());

        let book = lib.catalog.get("978-1455555988").unwrap();
        assert_eq!(book.title, "The Martian");
        assert_eq!(book.total_copies, 4);
        assert_eq!(book.available_copies, 2);
    }

    #[test]
    fn update_total_keeps_loans_intact() {
        let lib = stocked();
        lib.lending.borrow("M001", "978-1455555988").unwrap(); // 1 of 4 out
        lib.catalog
            .update("978-1455555988", BookPatch::new().total_copies(2))
            .unwrap();
        let book = lib.catalog.get("978-1455555988").unwrap();
        assert_eq!(book.total_copies, 2);
        assert_eq!(book.available_copies, 1);
    }
}

// ============================================================================
// Roster surface
// ============================================================================

mod roster {
    use super::*;

    #[test]
    fn add_find_update_delete() {
        let lib = Library::ephemeral();
        lib.roster.add("M001", "John Doe", "john@example.com").unwrap();
        assert!(lib.roster.add("M001", "Jane Doe", "jane@example.com").unwrap_err().is_duplicate());

        let member = lib.roster.get("M001").unwrap();
        assert_eq!(member.name, "John Doe");
        assert!(member.borrowed.is_empty());

        lib.roster
            .update("M001", MemberPatch::new().name("John Smith").email("smith@example.com"))
            .unwrap();
        let member = lib.roster.get("M001").unwrap();
        assert_eq!(member.name, "John Smith");
        assert_eq!(member.email, "smith@example.com");

        lib.roster.remove("M001").unwrap();
        assert!(lib.roster.get("M001").is_none());
    }

    #[test]
    fn operations_on_missing_members_fail_cleanly() {
        let lib = Library::ephemeral();
        assert!(lib.roster.update("ghost", MemberPatch::new().name("X")).unwrap_err().is_not_found());
        assert!(lib.roster.remove("ghost").unwrap_err().is_not_found());
        assert!(lib.lending.borrow("ghost", "978-1").unwrap_err().is_not_found());
    }
}

// ============================================================================
// Lending flows
// ============================================================================

mod lending {
    use super::*;

    #[test]
    fn borrow_limit_is_three_then_fourth_fails() {
        let lib = Library::ephemeral();
        for i in 0..5 {
            lib.catalog
                .add(&format!("978-444444444{}", i), &format!("Book {}", i), "Author", "Fiction", 1)
                .unwrap();
        }
        lib.roster.add("M003", "Heavy Borrower", "heavy@example.com").unwrap();

        for i in 0..3 {
            assert!(lib.lending.borrow("M003", &format!("978-444444444{}", i)).is_ok());
        }
        let err = lib.lending.borrow("M003", "978-4444444443").unwrap_err();
        assert!(err.is_lending_rule());
        assert_eq!(lib.roster.get("M003").unwrap().borrowed.len(), MAX_BORROW);
    }

    #[test]
    fn single_copy_contention_resolves_on_return() {
        let lib = Library::ephemeral();
        lib.catalog.add("978-1", "Solo", "Author", "Fiction", 1).unwrap();
        lib.roster.add("M001", "First", "first@example.com").unwrap();
        lib.roster.add("M002", "Second", "second@example.com").unwrap();

        lib.lending.borrow("M001", "978-1").unwrap();
        assert_eq!(lib.catalog.get("978-1").unwrap().available_copies, 0);
        assert!(lib.lending.borrow("M002", "978-1").is_err());

        lib.lending.return_book("M001", "978-1").unwrap();
        assert_eq!(lib.catalog.get("978-1").unwrap().available_copies, 1);
        assert!(lib.lending.borrow("M002", "978-1").is_ok());
    }

    #[test]
    fn delete_flows_respect_outstanding_loans() {
        let lib = Library::ephemeral();
        lib.catalog.add("978-5", "Deletable", "Author", "Fiction", 1).unwrap();
        lib.roster.add("M004", "Deletable Member", "delete@example.com").unwrap();

        lib.lending.borrow("M004", "978-5").unwrap();
        assert!(lib.catalog.remove("978-5").is_err());
        assert!(lib.roster.remove("M004").is_err());

        lib.lending.return_book("M004", "978-5").unwrap();
        lib.catalog.remove("978-5").unwrap();
        assert!(lib.catalog.get("978-5").is_none());
        assert!(lib.catalog.search("Deletable").is_empty());

        lib.roster.remove("M004").unwrap();
        assert!(lib.roster.get("M004").is_none());
    }

    #[test]
    fn borrow_then_return_restores_prior_state_exactly() {
        let lib = stocked();
        let book_before = lib.catalog.get("978-0345510366").unwrap();
        let member_before = lib.roster.get("M001").unwrap();

        lib.lending.borrow("M001", "978-0345510366").unwrap();
        lib.lending.return_book("M001", "978-0345510366").unwrap();

        assert_eq!(lib.catalog.get("978-0345510366").unwrap(), book_before);
        assert_eq!(lib.roster.get("M001").unwrap(), member_before);
    }

    #[test]
    fn returning_a_book_never_borrowed_keeps_failing() {
        let lib = stocked();
        assert!(lib.lending.return_book("M001", "978-0345510366").is_err());
        // the failure is idempotent
        assert!(lib.lending.return_book("M001", "978-0345510366").is_err());
        assert_eq!(lib.catalog.get("978-0345510366").unwrap().available_copies, 7);
    }
}

// ============================================================================
// Reports
// ============================================================================

mod reports {
    use super::*;

    #[test]
    fn loans_resolve_titles_in_borrow_order() {
        let lib = stocked();
        lib.lending.borrow("M001", "978-1455555988").unwrap();
        lib.lending.borrow("M001", "978-0545010221").unwrap();

        let loans = lib.reports.loans_of("M001").unwrap();
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[0].title, "The Martian");
        assert_eq!(loans[1].title, "The Hitchhiker's Guide to the Galaxy");
        assert!(lib.reports.loans_of("ghost").is_err());
    }

    #[test]
    fn availability_reports_partition_the_catalog() {
        let lib = Library::ephemeral();
        lib.catalog.add("978-1", "One Copy", "A", "Fiction", 1).unwrap();
        lib.catalog.add("978-2", "Two Copies", "A", "Fiction", 2).unwrap();
        lib.roster.add("M001", "N", "n@example.com").unwrap();
        lib.lending.borrow("M001", "978-1").unwrap();

        let available: Vec<_> = lib.reports.available().into_iter().map(|b| b.title).collect();
        let exhausted: Vec<_> = lib.reports.exhausted().into_iter().map(|b| b.title).collect();
        assert_eq!(available, vec!["Two Copies"]);
        assert_eq!(exhausted, vec!["One Copy"]);
    }

    #[test]
    fn stats_reflect_current_committed_state() {
        let lib = stocked();
        lib.lending.borrow("M001", "978-0545010221").unwrap();

        let stats = lib.stats();
        assert_eq!(stats.book_count, 3);
        assert_eq!(stats.member_count, 2);
        assert_eq!(stats.copies_total, 21);
        assert_eq!(stats.copies_on_loan, 1);
        assert_eq!(stats.copies_available, 20);

        lib.lending.return_book("M001", "978-0545010221").unwrap();
        assert_eq!(lib.stats().copies_on_loan, 0);
    }
}
