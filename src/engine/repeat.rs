#![forbid(unsafe_code)]

//! The echo loop
//!
//! Each iteration writes the words, optionally announces the upcoming sleep,
//! then suspends for the configured delay. Cancellation is observed at the
//! top of every iteration and during the suspension, never between the two
//! writes of a single iteration.

use crate::console::Console;
use crate::engine::cancel::CancellationToken;
use std::io;
use std::time::Duration;

/// How many times the loop runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    Times(u64),
    Forever,
}

impl Repetition {
    fn allows(self, completed: u64) -> bool {
        match self {
            Repetition::Times(count) => completed < count,
            Repetition::Forever => true,
        }
    }
}

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatOutcome {
    /// Every requested iteration ran to the end of its delay
    Completed { iterations: u64 },
    /// The token was canceled; `iterations` counts the echoes already written
    Canceled { iterations: u64 },
}

impl RepeatOutcome {
    pub fn iterations(self) -> u64 {
        match self {
            RepeatOutcome::Completed { iterations } | RepeatOutcome::Canceled { iterations } => {
                iterations
            }
        }
    }

    pub fn is_canceled(self) -> bool {
        matches!(self, RepeatOutcome::Canceled { .. })
    }
}

/// Runs the timed repeat loop for one echo command
#[derive(Debug, Clone)]
pub struct RepeatExecutor<'a> {
    words: &'a str,
    delay_ms: u64,
    repetition: Repetition,
    verbose: bool,
}

impl<'a> RepeatExecutor<'a> {
    pub fn new(words: &'a str, delay_ms: u64, repetition: Repetition) -> Self {
        RepeatExecutor {
            words,
            delay_ms,
            repetition,
            verbose: false,
        }
    }

    /// Announce each sleep with `Sleeping for <delay>ms...`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the loop until it completes or `token` is canceled
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the console. The loop stops at that
    /// point.
    pub fn run(
        &self,
        console: &mut dyn Console,
        token: &CancellationToken,
    ) -> io::Result<RepeatOutcome> {
        let delay = Duration::from_millis(self.delay_ms);
        let mut iterations = 0;

        while self.repetition.allows(iterations) {
            if token.is_canceled() {
                log::debug!("canceled before iteration {}", iterations + 1);
                return Ok(RepeatOutcome::Canceled { iterations });
            }

            console.out(self.words)?;
            iterations += 1;

            if self.verbose {
                console.out(&format!("Sleeping for {}ms...", self.delay_ms))?;
            }

            log::trace!("iteration {} written, sleeping {:?}", iterations, delay);
            if token.sleep(delay).is_err() {
                log::debug!("canceled while sleeping after iteration {}", iterations);
                return Ok(RepeatOutcome::Canceled { iterations });
            }
        }

        Ok(RepeatOutcome::Completed { iterations })
    }
}
