//! CLI argument parsing and command dispatch

pub mod args;
pub mod dispatch;

// Re-export types for convenient access
pub use args::{
    Cli, ColorChoice, Command, EchoCommand, EchoForeverArgs, EchoTimesArgs, GreetingArgs,
};
pub use dispatch::{dispatch, run};
