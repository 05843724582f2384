//! Timed repeat loop and the cancellation signal it observes

pub mod cancel;
pub mod repeat;

pub use cancel::{CancellationToken, Canceled};
pub use repeat::{RepeatExecutor, RepeatOutcome, Repetition};
