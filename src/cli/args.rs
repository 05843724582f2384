#![forbid(unsafe_code)]

//! Command-line definition

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Greets you and repeats what you say
#[derive(Debug, Parser)]
#[command(name = "echoes", version)]
pub struct Cli {
    /// When to color error output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Say hi.
    Greeting(GreetingArgs),

    /// Stop copying me!
    Echo {
        #[command(subcommand)]
        command: EchoCommand,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum EchoCommand {
    /// Repeat a number of times.
    Times(EchoTimesArgs),

    /// Just keep repeating.
    Forever(EchoForeverArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct GreetingArgs {
    /// Your name.
    pub name: String,

    /// The greeting to use.
    #[arg(short, long)]
    pub greeting: Option<String>,

    /// Show the deets.
    #[arg(short, long)]
    pub verbose: bool,
}

// Counts and delays are signed so that out-of-range values reach the handler
// and get the friendly validation message instead of a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct EchoTimesArgs {
    /// The thing you are saying.
    pub words: String,

    /// The number of times to copy you.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,

    /// The delay between each echo.
    #[arg(short, long, default_value_t = 100, allow_negative_numbers = true)]
    pub delay: i64,

    /// Show the deets.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct EchoForeverArgs {
    /// The thing you are saying.
    pub words: String,

    /// The delay between each echo.
    #[arg(short, long, default_value_t = 100, allow_negative_numbers = true)]
    pub delay: i64,

    /// Show the deets.
    #[arg(short, long)]
    pub verbose: bool,
}
