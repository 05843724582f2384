#![forbid(unsafe_code)]

//! Error types shared by the command handlers

use std::io;
use thiserror::Error;

/// A parameter that parsed fine but makes no sense for the command
///
/// The `Display` output is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `--count` was zero or negative
    #[error("The count needs to be at least 1.")]
    CountTooSmall,

    /// `--delay` was negative
    #[error("The delay needs to be 0 or a positive number.")]
    NegativeDelay,
}

/// Errors that can end a command early
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Writing to the console failed (for example, the reader closed the pipe)
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
