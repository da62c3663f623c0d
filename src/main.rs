use std::io;
use std::process::ExitCode;

use log::{error, info};
use rusty_poll::config::Config;
use rusty_poll::handlers::Session;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    // Initialize logging
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Fatal error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Starting poll manager, exports go to {}", config.export_dir.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    if let Err(e) = session.run() {
        error!("Console session failed: {}", e);
        eprintln!("Fatal error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
