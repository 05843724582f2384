#![forbid(unsafe_code)]

//! Line-oriented console used by every command
//!
//! Handlers never touch stdout/stderr directly. They write whole lines to a
//! [`Console`], which lets the binary colorize errors and lets tests capture
//! output in memory.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Which of the two standard streams a line goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

/// Destination for command output
pub trait Console {
    /// Write `text` followed by a newline to `stream`
    fn write_line(&mut self, stream: Stream, text: &str) -> io::Result<()>;

    fn out(&mut self, text: &str) -> io::Result<()> {
        self.write_line(Stream::Out, text)
    }

    fn err(&mut self, text: &str) -> io::Result<()> {
        self.write_line(Stream::Err, text)
    }
}

/// Console backed by the process's stdout and stderr
///
/// Lines on stderr are printed in red when coloring is enabled.
pub struct TerminalConsole {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl TerminalConsole {
    /// Creates a new TerminalConsole with the specified color choice
    ///
    /// `ColorChoice::Auto` is narrowed to `Never` for any stream that is not
    /// attached to a terminal, since termcolor only inspects `TERM`.
    pub fn new(color_choice: ColorChoice) -> Self {
        TerminalConsole {
            stdout: StandardStream::stdout(resolve(color_choice, io::stdout().is_terminal())),
            stderr: StandardStream::stderr(resolve(color_choice, io::stderr().is_terminal())),
        }
    }
}

fn resolve(choice: ColorChoice, is_terminal: bool) -> ColorChoice {
    match choice {
        ColorChoice::Auto if !is_terminal => ColorChoice::Never,
        other => other,
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        match stream {
            Stream::Out => {
                writeln!(self.stdout, "{}", text)?;
                self.stdout.flush()
            }
            Stream::Err => {
                self.stderr
                    .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(self.stderr, "{}", text)?;
                self.stderr.reset()?;
                writeln!(self.stderr)?;
                self.stderr.flush()
            }
        }
    }
}

/// Console that records every line in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    lines: Vec<(Stream, String)>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in the order they were written, tagged with their stream
    pub fn lines(&self) -> &[(Stream, String)] {
        &self.lines
    }

    pub fn stdout_lines(&self) -> Vec<&str> {
        self.lines_for(Stream::Out)
    }

    pub fn stderr_lines(&self) -> Vec<&str> {
        self.lines_for(Stream::Err)
    }

    fn lines_for(&self, stream: Stream) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

impl Console for MemoryConsole {
    fn write_line(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        self.lines.push((stream, text.to_string()));
        Ok(())
    }
}
