mod check_config;
mod cli;
mod error;
mod run;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            pages,
            max_retries,
            dry_run,
            init,
            verbose,
        } => run::execute(run::RunArgs {
            config,
            pages,
            max_retries,
            dry_run,
            init,
            verbose,
        }),
        Commands::CheckConfig { config } => check_config::execute(&config),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
