#![forbid(unsafe_code)]

use clap::Parser;
use echoes::cli::{self, Cli};
use echoes::console::TerminalConsole;
use echoes::engine::CancellationToken;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors exit here with clap's own formatting and exit code
    let cli = Cli::parse();

    let token = CancellationToken::new();
    let interrupt = token.clone();
    if let Err(e) = ctrlc::set_handler(move || interrupt.cancel()) {
        log::warn!("could not install Ctrl-C handler: {}", e);
    }

    let mut console = TerminalConsole::new(cli.color.into());
    let code = cli::dispatch(cli.command, &mut console, &token);
    log::debug!("exiting with code {}", code);

    std::process::exit(code);
}
