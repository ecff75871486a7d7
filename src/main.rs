//! EventDesk console application
//!
//! Main application entry point

use std::io;
use std::process::ExitCode;
use anyhow::Context;
use tracing::{error, info};

use EventDesk::{
    config::Settings,
    handlers::{run_session, Console},
    services::ServiceFactory,
    utils::logging,
};

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging, the guard flushes the log file on exit
    let _guard = logging::init_logging(&settings.logging).context("failed to initialize logging")?;

    info!(
        data_dir = %settings.storage.data_dir().display(),
        "Starting {}",
        EventDesk::info()
    );

    let services = ServiceFactory::new(&settings);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match run_session(&mut console, &services) {
        Ok(outcome) => {
            info!(outcome = ?outcome, "EventDesk has been shut down.");
            Ok(ExitCode::from(outcome.exit_code()))
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            Err(e.into())
        }
    }
}
