//! Shows the current working directory in a native dialog, then waits for Enter.
//!
//! Takes no arguments. Configuration comes from `CWD_DIALOG_*` environment
//! variables and logging from `RUST_LOG` (stderr, default `warn`).

use std::io;

use dialog_presenter::{Message, PresenterConfig, SystemRunner};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = PresenterConfig::from_env()?;
    let message = Message::for_current_dir(config.title.clone())?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = dialog_presenter::run(
        &config,
        &message,
        SystemRunner::new(config.probe),
        &mut stdin.lock(),
        &mut stdout.lock(),
    ) {
        tracing::error!("Failed to present working directory: {}", e);
        return Err(e.into());
    }

    Ok(())
}
