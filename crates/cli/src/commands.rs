//! clap command tree.
//!
//! One set of subcommands serves both shell mode (with binary name and
//! global flags) and REPL/pipe mode (bare subcommands per line).

use clap::{value_parser, Arg, ArgAction, Command};

/// Top-level CLI for shell mode.
pub fn build_cli() -> Command {
    Command::new("circ")
        .about("Circulation database CLI: catalog, roster, and lending")
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("FILE")
                .help("TOML seed file with genres and initial records"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit JSON instead of human-readable output"),
        )
        .subcommands(subcommands())
}

/// Bare command parser for REPL and pipe lines.
pub fn build_line_cli() -> Command {
    Command::new("circ")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommands(subcommands())
}

fn subcommands() -> Vec<Command> {
    vec![
        Command::new("book")
            .about("Catalog operations")
            .subcommand_required(true)
            .subcommand(
                Command::new("add")
                    .about("Add a book (starts fully available)")
                    .arg(Arg::new("isbn").required(true))
                    .arg(Arg::new("title").required(true))
                    .arg(Arg::new("author").required(true))
                    .arg(Arg::new("genre").required(true))
                    .arg(
                        Arg::new("total")
                            .required(true)
                            .value_parser(value_parser!(u32)),
                    ),
            )
            .subcommand(
                Command::new("get")
                    .about("Show one book")
                    .arg(Arg::new("isbn").required(true)),
            )
            .subcommand(
                Command::new("search")
                    .about("Search titles and authors (case-insensitive substring)")
                    .arg(Arg::new("query").required(true)),
            )
            .subcommand(
                Command::new("update")
                    .about("Update book fields; omitted flags stay unchanged")
                    .arg(Arg::new("isbn").required(true))
                    .arg(Arg::new("title").long("title").value_name("TITLE"))
                    .arg(Arg::new("author").long("author").value_name("AUTHOR"))
                    .arg(Arg::new("genre").long("genre").value_name("GENRE"))
                    .arg(
                        Arg::new("total")
                            .long("total")
                            .value_name("N")
                            .value_parser(value_parser!(u32)),
                    ),
            )
            .subcommand(
                Command::new("del")
                    .about("Delete a book (refused while copies are on loan)")
                    .arg(Arg::new("isbn").required(true)),
            )
            .subcommand(Command::new("list").about("List the whole catalog")),
        Command::new("member")
            .about("Roster operations")
            .subcommand_required(true)
            .subcommand(
                Command::new("add")
                    .about("Add a member")
                    .arg(Arg::new("id").required(true))
                    .arg(Arg::new("name").required(true))
                    .arg(Arg::new("email").required(true)),
            )
            .subcommand(
                Command::new("get")
                    .about("Show one member")
                    .arg(Arg::new("id").required(true)),
            )
            .subcommand(
                Command::new("update")
                    .about("Update member contact details")
                    .arg(Arg::new("id").required(true))
                    .arg(Arg::new("name").long("name").value_name("NAME"))
                    .arg(Arg::new("email").long("email").value_name("EMAIL")),
            )
            .subcommand(
                Command::new("del")
                    .about("Delete a member (refused while they hold books)")
                    .arg(Arg::new("id").required(true)),
            )
            .subcommand(Command::new("list").about("List the whole roster")),
        Command::new("borrow")
            .about("Check a book out to a member")
            .arg(Arg::new("member").required(true))
            .arg(Arg::new("isbn").required(true)),
        Command::new("return")
            .about("Take a book back from a member")
            .arg(Arg::new("member").required(true))
            .arg(Arg::new("isbn").required(true)),
        Command::new("loans")
            .about("Books a member currently holds, in borrow order")
            .arg(Arg::new("member").required(true)),
        Command::new("available").about("Books with at least one copy on the shelf"),
        Command::new("exhausted").about("Books with every copy out"),
        Command::new("genres").about("The closed genre set"),
        Command::new("stats").about("Whole-library counters"),
    ]
}
