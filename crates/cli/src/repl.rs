//! REPL and pipe modes.
//!
//! Both feed lines through the same path: meta-command check first,
//! then shlex splitting and the bare-line clap parser.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::BufRead;

use crate::commands::build_line_cli;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

const HISTORY_FILE: &str = ".circ_history";

enum LineResult {
    Ok,
    Failed,
    Quit,
}

/// Interactive prompt. Returns when the user quits.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("(error) cannot start line editor: {}", e);
            return;
        }
    };
    let _ = editor.load_history(HISTORY_FILE);

    loop {
        match editor.readline("circ> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);
                if let LineResult::Quit = handle_line(trimmed, state, mode) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }
    let _ = editor.save_history(HISTORY_FILE);
}

/// Line-by-line mode for piped stdin. Returns the process exit code:
/// nonzero if any line failed.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = std::io::stdin();
    let mut exit_code = 0;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match handle_line(trimmed, state, mode) {
            LineResult::Ok => {}
            LineResult::Failed => exit_code = 1,
            LineResult::Quit => break,
        }
    }
    exit_code
}

fn handle_line(line: &str, state: &mut SessionState, mode: OutputMode) -> LineResult {
    if let Some(meta) = check_meta_command(line) {
        return match meta {
            MetaCommand::Quit => LineResult::Quit,
            MetaCommand::Help => {
                let mut cli = build_line_cli();
                println!("{}", cli.render_help());
                LineResult::Ok
            }
        };
    }

    let args = match shlex::split(line) {
        Some(args) => args,
        None => {
            eprintln!("(error) unbalanced quotes");
            return LineResult::Failed;
        }
    };

    let matches = match build_line_cli().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("{}", e);
            return LineResult::Failed;
        }
    };

    match matches_to_action(&matches) {
        Ok(CliAction::Execute(cmd)) => match state.execute(cmd) {
            Ok(output) => {
                println!("{}", format_output(&output, mode));
                LineResult::Ok
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                LineResult::Failed
            }
        },
        Ok(CliAction::Meta(_)) => LineResult::Ok,
        Err(e) => {
            eprintln!("(error) {}", e);
            LineResult::Failed
        }
    }
}
