//! Output formatting.
//!
//! Human output for terminals, JSON for scripting. All user-facing
//! message text lives here; the library itself never prints.

use circdb::{Book, Error, Member};
use serde_json::json;

use crate::state::CommandOutput;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Render a successful command result.
pub fn format_output(output: &CommandOutput, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Render a failure.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => json!({ "error": err.to_string() }).to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_json(output: &CommandOutput) -> String {
    let value = match output {
        CommandOutput::Done => json!({ "ok": true }),
        CommandOutput::Book(book) => json!(book),
        CommandOutput::Books(books) => json!(books),
        CommandOutput::Member(member) => json!(member),
        CommandOutput::Members(members) => json!(members),
        CommandOutput::Names(names) => json!(names),
        CommandOutput::Stats(stats) => json!(stats),
    };
    value.to_string()
}

fn format_human(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Done => "OK".to_string(),
        CommandOutput::Book(book) => book_line(book),
        CommandOutput::Books(books) => {
            if books.is_empty() {
                "(empty)".to_string()
            } else {
                books.iter().map(book_line).collect::<Vec<_>>().join("\n")
            }
        }
        CommandOutput::Member(member) => member_line(member),
        CommandOutput::Members(members) => {
            if members.is_empty() {
                "(empty)".to_string()
            } else {
                members.iter().map(member_line).collect::<Vec<_>>().join("\n")
            }
        }
        CommandOutput::Names(names) => names.join(", "),
        CommandOutput::Stats(stats) => format!(
            "books: {}  members: {}  copies: {} ({} available, {} on loan)",
            stats.book_count,
            stats.member_count,
            stats.copies_total,
            stats.copies_available,
            stats.copies_on_loan
        ),
    }
}

fn book_line(book: &Book) -> String {
    format!(
        "{}  {} by {} [{}]  {}/{} available",
        book.isbn, book.title, book.author, book.genre, book.available_copies, book.total_copies
    )
}

fn member_line(member: &Member) -> String {
    let held = if member.borrowed.is_empty() {
        "holds nothing".to_string()
    } else {
        let isbns: Vec<_> = member.borrowed.iter().map(|i| i.to_string()).collect();
        format!("holds {}", isbns.join(", "))
    };
    format!(
        "{}  {} <{}>  {}",
        member.member_id, member.name, member.email, held
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use circdb::{Isbn, MemberId};

    fn sample_book() -> Book {
        Book {
            isbn: Isbn::from("978-1"),
            title: "The Martian".to_string(),
            author: "Andy Weir".to_string(),
            genre: "Sci-Fi".to_string(),
            total_copies: 4,
            available_copies: 3,
        }
    }

    #[test]
    fn human_book_line_shows_availability() {
        let line = format_output(&CommandOutput::Book(sample_book()), OutputMode::Human);
        assert!(line.contains("The Martian"));
        assert!(line.contains("3/4 available"));
    }

    #[test]
    fn json_output_is_parseable() {
        let out = format_output(&CommandOutput::Books(vec![sample_book()]), OutputMode::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["isbn"], "978-1");
        assert_eq!(parsed[0]["available_copies"], 3);
    }

    #[test]
    fn errors_render_in_both_modes() {
        let err = Error::Unavailable(Isbn::from("978-1"));
        assert_eq!(
            format_error(&err, OutputMode::Human),
            "(error) no copies of 978-1 available"
        );
        let parsed: serde_json::Value =
            serde_json::from_str(&format_error(&err, OutputMode::Json)).unwrap();
        assert!(parsed["error"].as_str().unwrap().contains("978-1"));
    }

    #[test]
    fn member_line_lists_held_isbns() {
        let member = Member {
            member_id: MemberId::from("M001"),
            name: "Kadio".to_string(),
            email: "k@example.com".to_string(),
            borrowed: vec![Isbn::from("978-1"), Isbn::from("978-2")],
        };
        let line = format_output(&CommandOutput::Member(member), OutputMode::Human);
        assert!(line.contains("holds 978-1, 978-2"));
    }
}
