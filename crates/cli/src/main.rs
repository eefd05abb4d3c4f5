//! circ: CLI for the circdb circulation database.
//!
//! Three modes:
//! - **Shell mode**: `circ [flags] COMMAND` runs a single command and exits
//! - **REPL mode**: `circ [flags]` gives an interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "book list" | circ` reads line-by-line from stdin
//!
//! The library state lives only for the life of the process; pass
//! `--seed FILE` to start from a TOML seed.

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use circdb::Library;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::{matches_to_action, CliAction};
use state::SessionState;

fn main() {
    init_tracing();

    let cli = build_cli();
    let matches = cli.get_matches();

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // Open the library (empty, or from the seed file)
    let lib = match open_library(&matches) {
        Ok(lib) => lib,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut state = SessionState::new(lib);

    // Dispatch mode
    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, format, exit
        let exit_code = run_shell_mode(&matches, &mut state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        // REPL mode
        repl::run_repl(&mut state, output_mode);
    } else {
        // Pipe mode
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("circ=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn open_library(matches: &clap::ArgMatches) -> Result<Library, String> {
    match matches.get_one::<String>("seed") {
        Some(path) => {
            Library::open(path).map_err(|e| format!("Failed to open seeded library: {}", e))
        }
        None => Ok(Library::ephemeral()),
    }
}

fn run_shell_mode(
    matches: &clap::ArgMatches,
    state: &mut SessionState,
    mode: OutputMode,
) -> i32 {
    match matches_to_action(matches) {
        Ok(CliAction::Execute(cmd)) => match state.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                0
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                1
            }
        },
        Ok(CliAction::Meta(_)) => {
            eprintln!("(error) Meta-commands are only available in REPL mode");
            1
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
