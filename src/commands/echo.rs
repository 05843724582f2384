#![forbid(unsafe_code)]

//! `echo times` and `echo forever`
//!
//! Both commands validate their parameters before writing anything, then
//! hand the loop to [`RepeatExecutor`]. Cancellation is a normal way to stop
//! and still yields [`EXIT_SUCCESS`](super::EXIT_SUCCESS). A canceled run
//! never prints the closing `All done!`, and since `echo forever` can only
//! end by cancellation it has no closing message at all.

use crate::cli::{EchoForeverArgs, EchoTimesArgs};
use crate::console::Console;
use crate::engine::{CancellationToken, RepeatExecutor, RepeatOutcome, Repetition};
use crate::error::{Result, ValidationError};

/// Run `echo times` and return its exit code
pub fn run_echo_times(
    args: &EchoTimesArgs,
    console: &mut dyn Console,
    token: &CancellationToken,
) -> i32 {
    let result = echo_times(args, console, token);
    super::exit_code(result, console)
}

/// Run `echo forever` and return its exit code
pub fn run_echo_forever(
    args: &EchoForeverArgs,
    console: &mut dyn Console,
    token: &CancellationToken,
) -> i32 {
    let result = echo_forever(args, console, token);
    super::exit_code(result, console)
}

/// Echo `words` exactly `count` times, sleeping `delay` ms after each one
///
/// # Errors
///
/// - [`ValidationError::CountTooSmall`] if `count < 1` (checked first)
/// - [`ValidationError::NegativeDelay`] if `delay < 0`
/// - an I/O error if the console cannot be written
pub fn echo_times(
    args: &EchoTimesArgs,
    console: &mut dyn Console,
    token: &CancellationToken,
) -> Result<RepeatOutcome> {
    let count = validate_count(args.count)?;
    let delay_ms = validate_delay(args.delay)?;

    if args.verbose {
        console.out(&format!(
            "About to repeat '{}' {} time[s]...",
            args.words, count
        ))?;
    }

    let outcome = RepeatExecutor::new(&args.words, delay_ms, Repetition::Times(count))
        .verbose(args.verbose)
        .run(console, token)?;

    if let RepeatOutcome::Completed { .. } = outcome
        && args.verbose
    {
        console.out("All done!")?;
    }

    Ok(outcome)
}

/// Echo `words` until `token` is canceled
pub fn echo_forever(
    args: &EchoForeverArgs,
    console: &mut dyn Console,
    token: &CancellationToken,
) -> Result<RepeatOutcome> {
    let delay_ms = validate_delay(args.delay)?;

    if args.verbose {
        console.out(&format!("About to repeat '{}' forever...", args.words))?;
    }

    let outcome = RepeatExecutor::new(&args.words, delay_ms, Repetition::Forever)
        .verbose(args.verbose)
        .run(console, token)?;

    log::debug!("echo forever stopped after {} echoes", outcome.iterations());
    Ok(outcome)
}

fn validate_count(count: i64) -> std::result::Result<u64, ValidationError> {
    match u64::try_from(count) {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(ValidationError::CountTooSmall),
    }
}

fn validate_delay(delay: i64) -> std::result::Result<u64, ValidationError> {
    u64::try_from(delay).map_err(|_| ValidationError::NegativeDelay)
}
