#![forbid(unsafe_code)]

//! Echoes: greets you and repeats what you say
//!
//! The binary is a thin wrapper: it parses the command line with [`cli::Cli`],
//! wires Ctrl-C to an [`engine::CancellationToken`], and hands both to
//! [`cli::dispatch`].

pub mod cli;
pub mod commands;
pub mod console;
pub mod engine;
pub mod error;
