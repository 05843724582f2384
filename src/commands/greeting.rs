#![forbid(unsafe_code)]

//! `greeting <name>`: say hi

use crate::cli::GreetingArgs;
use crate::console::Console;
use crate::error::Result;

const DEFAULT_GREETING: &str = "Hi";

/// Run the greeting command and return its exit code
pub fn run_greeting(args: &GreetingArgs, console: &mut dyn Console) -> i32 {
    let result = greet(args, console);
    super::exit_code(result, console)
}

/// Write `<greeting> <name>!`, wrapped in progress messages when verbose
pub fn greet(args: &GreetingArgs, console: &mut dyn Console) -> Result<()> {
    if args.verbose {
        console.out(&format!("About to say hi to '{}'...", args.name))?;
    }

    let greeting = args.greeting.as_deref().unwrap_or(DEFAULT_GREETING);
    console.out(&format!("{} {}!", greeting, args.name))?;

    if args.verbose {
        console.out("All done!")?;
    }

    Ok(())
}
