//! Command handlers
//!
//! Each command has an inner function returning [`crate::error::Result`] and a
//! `run_*` wrapper that reports errors on the console and maps the result to
//! a process exit code.

pub mod echo;
pub mod greeting;

pub use echo::{echo_forever, echo_times, run_echo_forever, run_echo_times};
pub use greeting::{greet, run_greeting};

use crate::console::Console;
use crate::error::Error;

/// Exit codes for command handlers
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Report a handler result and turn it into an exit code
fn exit_code<T>(result: Result<T, Error>, console: &mut dyn Console) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(Error::Validation(e)) => {
            log::debug!("validation failed: {:?}", e);
            // Nothing sensible is left to do if stderr is gone too
            let _ = console.err(&e.to_string());
            EXIT_FAILURE
        }
        Err(e @ Error::Io(_)) => {
            let _ = console.err(&format!("error: {}", e));
            EXIT_FAILURE
        }
    }
}
