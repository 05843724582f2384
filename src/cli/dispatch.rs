#![forbid(unsafe_code)]

//! Routes a parsed command line to its handler
//!
//! Every command maps to exactly one statically typed handler through the
//! `match` in [`dispatch`]. Nothing is looked up by name at run time.

use crate::cli::args::{Cli, Command, EchoCommand};
use crate::commands::{run_echo_forever, run_echo_times, run_greeting};
use crate::console::{Console, Stream};
use crate::engine::CancellationToken;
use clap::Parser;
use std::ffi::OsString;

/// Parse `args` (including the program name) and run the selected command
///
/// Usage errors are written to the console and return clap's exit code (2);
/// `--help` and `--version` go to standard output and return 0.
pub fn run<I, T>(args: I, console: &mut dyn Console, token: &CancellationToken) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => dispatch(cli.command, console, token),
        Err(err) => report_parse_error(&err, console),
    }
}

/// Run the handler for `command` and return its exit code
pub fn dispatch(command: Command, console: &mut dyn Console, token: &CancellationToken) -> i32 {
    log::debug!("dispatching {:?}", command);

    match command {
        Command::Greeting(args) => run_greeting(&args, console),
        Command::Echo { command } => match command {
            EchoCommand::Times(args) => run_echo_times(&args, console, token),
            EchoCommand::Forever(args) => run_echo_forever(&args, console, token),
        },
    }
}

fn report_parse_error(err: &clap::Error, console: &mut dyn Console) -> i32 {
    let stream = if err.use_stderr() {
        Stream::Err
    } else {
        Stream::Out
    };

    let rendered = err.render().to_string();
    for line in rendered.trim_end().lines() {
        if console.write_line(stream, line).is_err() {
            break;
        }
    }

    err.exit_code()
}
