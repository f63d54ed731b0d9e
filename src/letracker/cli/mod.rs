//! # CLI Client
//!
//! The only layer that touches stdin, stdout, stderr and exit codes.
//!
//! - `letracker add m/CS2040S` runs one command line and exits (status 1 on
//!   failure). Navigation does not carry over between invocations.
//! - `letracker` with no command starts an interactive session that reads
//!   lines until `exit`, end of input or Ctrl-C, prompting with the current
//!   location (`/r/CS2040S> `). A line that cannot be read is reported and
//!   skipped; it never ends the session.

pub mod logging;
pub mod render;
pub mod setup;
mod styles;

use clap::Parser;
use letracker::api::TrackerApi;
use letracker::commands::CmdResult;
use letracker::error::{Result, TrackerError};
use letracker::init::{initialize, resolve_data_dir};
use letracker::store::TrackerStore;
use logging::{init_logging, LogConfig};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use setup::Cli;
use std::io;
use styles::PROMPT;
use tracing::warn;

pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    init_logging(&log_config)?;

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let mut ctx = initialize(&data_dir);

    match cli.command_line() {
        Some(line) => Ok(run_once(&mut ctx.api, &line, cli.list)),
        None => {
            run_interactive(&mut ctx.api)?;
            Ok(0)
        }
    }
}

fn run_once<S: TrackerStore>(api: &mut TrackerApi<S>, line: &str, show_list: bool) -> i32 {
    match api.execute(line) {
        Ok(result) => {
            print_result(api, &result, show_list);
            0
        }
        Err(e) => {
            eprintln!("{}", render::render_error(&e));
            1
        }
    }
}

fn run_interactive<S: TrackerStore>(api: &mut TrackerApi<S>) -> Result<()> {
    let mut editor = DefaultEditor::new().map_err(readline_error)?;
    println!("Welcome to letracker! Type `help` to see what you can do.");
    loop {
        let prompt = format!("{} ", PROMPT.apply_to(format!("{}>", api.context())));
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                println!();
                break;
            }
            Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                eprintln!("{}", render::render_error(&TrackerError::Io(e)));
                continue;
            }
            Err(e) => return Err(readline_error(e)),
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            warn!(error = %e, "could not record history");
        }

        match api.execute(&line) {
            Ok(result) => {
                print_result(api, &result, false);
                if result.exit {
                    break;
                }
            }
            Err(e) => eprintln!("{}", render::render_error(&e)),
        }
    }
    Ok(())
}

fn readline_error(error: ReadlineError) -> TrackerError {
    match error {
        ReadlineError::Io(e) => TrackerError::Io(e),
        other => TrackerError::Io(io::Error::other(other.to_string())),
    }
}

fn print_result<S: TrackerStore>(api: &TrackerApi<S>, result: &CmdResult, show_list: bool) {
    if !result.messages.is_empty() {
        println!("{}", render::render_messages(&result.messages));
    }
    if result.show_help {
        println!("\n{}", render::render_help());
    }
    if result.show_view || show_list {
        println!(
            "\n{}",
            render::render_view(&api.view(), render::terminal_width())
        );
    }
}
