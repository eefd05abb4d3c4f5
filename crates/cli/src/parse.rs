//! ArgMatches → CliCommand conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Standard commands → `CliAction::Execute(CliCommand)`
//! - REPL meta-commands → `CliAction::Meta`

use clap::ArgMatches;
use circdb::{BookPatch, MemberPatch};

use crate::state::CliCommand;

/// The result of parsing user input.
pub enum CliAction {
    /// A standard command to execute via the session.
    Execute(CliCommand),
    /// A REPL-only meta-command.
    Meta(MetaCommand),
}

/// REPL meta-commands.
pub enum MetaCommand {
    Help,
    Quit,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None`
/// otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.trim() {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" | "?" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "book" => parse_book(sub_matches),
        "member" => parse_member(sub_matches),
        "borrow" => Ok(CliAction::Execute(CliCommand::Borrow {
            member: required(sub_matches, "member"),
            isbn: required(sub_matches, "isbn"),
        })),
        "return" => Ok(CliAction::Execute(CliCommand::Return {
            member: required(sub_matches, "member"),
            isbn: required(sub_matches, "isbn"),
        })),
        "loans" => Ok(CliAction::Execute(CliCommand::Loans {
            member: required(sub_matches, "member"),
        })),
        "available" => Ok(CliAction::Execute(CliCommand::Available)),
        "exhausted" => Ok(CliAction::Execute(CliCommand::Exhausted)),
        "genres" => Ok(CliAction::Execute(CliCommand::Genres)),
        "stats" => Ok(CliAction::Execute(CliCommand::Stats)),
        other => Err(format!("Unknown command: {}", other)),
    }
}

// Required positional args are guaranteed present by clap.
fn required(matches: &ArgMatches, name: &str) -> String {
    matches.get_one::<String>(name).cloned().unwrap_or_default()
}

// =========================================================================
// Book
// =========================================================================

fn parse_book(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub, m) = matches.subcommand().ok_or("No book subcommand")?;
    match sub {
        "add" => {
            let total_copies = *m.get_one::<u32>("total").unwrap_or(&0);
            Ok(CliAction::Execute(CliCommand::BookAdd {
                isbn: required(m, "isbn"),
                title: required(m, "title"),
                author: required(m, "author"),
                genre: required(m, "genre"),
                total_copies,
            }))
        }
        "get" => Ok(CliAction::Execute(CliCommand::BookGet {
            isbn: required(m, "isbn"),
        })),
        "search" => Ok(CliAction::Execute(CliCommand::BookSearch {
            query: required(m, "query"),
        })),
        "update" => {
            let mut patch = BookPatch::new();
            if let Some(title) = m.get_one::<String>("title") {
                patch = patch.title(title.clone());
            }
            if let Some(author) = m.get_one::<String>("author") {
                patch = patch.author(author.clone());
            }
            if let Some(genre) = m.get_one::<String>("genre") {
                patch = patch.genre(genre.clone());
            }
            if let Some(total) = m.get_one::<u32>("total") {
                patch = patch.total_copies(*total);
            }
            if patch.is_empty() {
                return Err("book update: no fields given (see --title/--author/--genre/--total)"
                    .to_string());
            }
            Ok(CliAction::Execute(CliCommand::BookUpdate {
                isbn: required(m, "isbn"),
                patch,
            }))
        }
        "del" => Ok(CliAction::Execute(CliCommand::BookDel {
            isbn: required(m, "isbn"),
        })),
        "list" => Ok(CliAction::Execute(CliCommand::BookList)),
        other => Err(format!("Unknown book subcommand: {}", other)),
    }
}

// =========================================================================
// Member
// =========================================================================

fn parse_member(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub, m) = matches.subcommand().ok_or("No member subcommand")?;
    match sub {
        "add" => Ok(CliAction::Execute(CliCommand::MemberAdd {
            id: required(m, "id"),
            name: required(m, "name"),
            email: required(m, "email"),
        })),
        "get" => Ok(CliAction::Execute(CliCommand::MemberGet {
            id: required(m, "id"),
        })),
        "update" => {
            let mut patch = MemberPatch::new();
            if let Some(name) = m.get_one::<String>("name") {
                patch = patch.name(name.clone());
            }
            if let Some(email) = m.get_one::<String>("email") {
                patch = patch.email(email.clone());
            }
            if patch.is_empty() {
                return Err("member update: no fields given (see --name/--email)".to_string());
            }
            Ok(CliAction::Execute(CliCommand::MemberUpdate {
                id: required(m, "id"),
                patch,
            }))
        }
        "del" => Ok(CliAction::Execute(CliCommand::MemberDel {
            id: required(m, "id"),
        })),
        "list" => Ok(CliAction::Execute(CliCommand::MemberList)),
        other => Err(format!("Unknown member subcommand: {}", other)),
    }
}
