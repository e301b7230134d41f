//! dfmanager - Dialogflow Agent Manager

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dfmanager_cli::cli::Cli;
use dfmanager_cli::domain::ManagerError;
use dfmanager_cli::output::json::format_error;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    if let Err(e) = cli.run() {
        let message = format!("{e:#}");
        if json {
            let code = e
                .downcast_ref::<ManagerError>()
                .map_or("error", ManagerError::code);
            match format_error(&message, code) {
                Ok(text) => println!("{text}"),
                Err(_) => eprintln!("Error: {message}"),
            }
        } else {
            eprintln!("Error: {message}");
        }
        std::process::exit(1);
    }
}
