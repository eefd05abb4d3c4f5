//! Conservation Invariant Tests
//!
//! Property tests driving random operation sequences against a
//! library and checking, after every single step, that:
//!
//! - for every book, `0 <= available_copies <= total_copies`
//! - every missing copy is accounted for by exactly one entry in some
//!   member's borrowed list
//! - no member ever holds more than `MAX_BORROW` books
//!
//! Operations are allowed to fail (that is most of the point); a
//! refused operation must leave the state exactly as valid as before.

use circdb::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

const ISBNS: &[&str] = &["978-0", "978-1", "978-2", "978-3", "978-4"];
const MEMBERS: &[&str] = &["M0", "M1", "M2"];

#[derive(Debug, Clone)]
enum Op {
    AddBook { slot: usize, total: u32 },
    RemoveBook { slot: usize },
    ResizeBook { slot: usize, total: u32 },
    AddMember { slot: usize },
    RemoveMember { slot: usize },
    Borrow { member: usize, slot: usize },
    Return { member: usize, slot: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let slot = 0..ISBNS.len();
    let member = 0..MEMBERS.len();
    prop_oneof![
        (slot.clone(), 0u32..4).prop_map(|(slot, total)| Op::AddBook { slot, total }),
        slot.clone().prop_map(|slot| Op::RemoveBook { slot }),
        (slot.clone(), 0u32..4).prop_map(|(slot, total)| Op::ResizeBook { slot, total }),
        member.clone().prop_map(|slot| Op::AddMember { slot }),
        member.clone().prop_map(|slot| Op::RemoveMember { slot }),
        (member.clone(), slot.clone()).prop_map(|(member, slot)| Op::Borrow { member, slot }),
        (member, slot).prop_map(|(member, slot)| Op::Return { member, slot }),
    ]
}

fn apply(lib: &Library, op: &Op) {
    // Failures are expected and deliberately ignored; the invariant
    // check below is what matters.
    let _ = match op {
        Op::AddBook { slot, total } => {
            lib.catalog
                .add(ISBNS[*slot], &format!("Book {}", slot), "Author", "Fiction", *total)
        }
        Op::RemoveBook { slot } => lib.catalog.remove(ISBNS[*slot]),
        Op::ResizeBook { slot, total } => lib
            .catalog
            .update(ISBNS[*slot], BookPatch::new().total_copies(*total)),
        Op::AddMember { slot } => {
            lib.roster
                .add(MEMBERS[*slot], &format!("Member {}", slot), "m@example.com")
        }
        Op::RemoveMember { slot } => lib.roster.remove(MEMBERS[*slot]),
        Op::Borrow { member, slot } => lib.lending.borrow(MEMBERS[*member], ISBNS[*slot]),
        Op::Return { member, slot } => lib.lending.return_book(MEMBERS[*member], ISBNS[*slot]),
    };
}

/// Check copy conservation and the borrow limit from public snapshots.
fn assert_invariants(lib: &Library) -> std::result::Result<(), TestCaseError> {
    let books = lib.catalog.list();
    let members = lib.roster.list();

    for member in &members {
        prop_assert!(
            member.borrowed.len() <= MAX_BORROW,
            "member {} holds {} books",
            member.member_id,
            member.borrowed.len()
        );
        // a held ISBN always resolves against the catalog
        for isbn in &member.borrowed {
            prop_assert!(
                books.iter().any(|b| &b.isbn == isbn),
                "member {} holds unknown isbn {}",
                member.member_id,
                isbn
            );
        }
    }

    for book in &books {
        prop_assert!(
            book.available_copies <= book.total_copies,
            "book {} has {}/{} copies",
            book.isbn,
            book.available_copies,
            book.total_copies
        );
        let held: usize = members
            .iter()
            .map(|m| m.borrowed.iter().filter(|isbn| **isbn == book.isbn).count())
            .sum();
        prop_assert_eq!(
            book.outstanding() as usize,
            held,
            "book {} outstanding/held mismatch",
            book.isbn.clone()
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn random_operation_sequences_preserve_conservation(
        ops in proptest::collection::vec(op_strategy(), 1..120)
    ) {
        let lib = Library::ephemeral();
        for op in &ops {
            apply(&lib, op);
            assert_invariants(&lib)?;
        }
    }

    #[test]
    fn borrow_heavy_sequences_never_break_the_limit(
        picks in proptest::collection::vec((0..MEMBERS.len(), 0..ISBNS.len()), 1..60)
    ) {
        let lib = Library::ephemeral();
        for (i, isbn) in ISBNS.iter().enumerate() {
            lib.catalog.add(isbn, &format!("Book {}", i), "Author", "Fiction", 2).unwrap();
        }
        for (i, id) in MEMBERS.iter().enumerate() {
            lib.roster.add(id, &format!("Member {}", i), "m@example.com").unwrap();
        }

        for (member, slot) in &picks {
            let _ = lib.lending.borrow(MEMBERS[*member], ISBNS[*slot]);
            assert_invariants(&lib)?;
        }
    }
}
