use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use repofolio::cli::Cli;
use repofolio::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(Level::WARN);

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
