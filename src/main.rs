mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::Cli;
use cli::context::Verbosity;

fn main() {
    let args = Cli::parse();
    cli::context::init(Verbosity::from_flags(args.verbose, args.quiet));

    if let Err(e) = cli::commands::export::execute(&args) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
