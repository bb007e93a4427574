//! Dialog Presenter - show the working directory in a native dialog
//!
//! The host platform picks a display strategy: AppleScript on macOS, one of
//! zenity / kdialog / xmessage on Linux, a PowerShell message box on
//! Windows. Missing tools fall back to the next candidate and finally to a
//! console print. After the dialog a short epilogue pauses, prints a
//! diagnostic line and waits for the user to press Enter.

use std::io::{BufRead, Write};

// Core modules
pub mod config;
pub mod epilogue;
pub mod error;
pub mod fallback;
pub mod message;
pub mod platform;
pub mod runner;

// Re-export core types
pub use config::PresenterConfig;
pub use epilogue::{Epilogue, DIAGNOSTIC_LINE, EXIT_PROMPT};
pub use error::PresenterError;
pub use fallback::{ExitPolicy, FallbackChain, Presentation, Terminal};
pub use message::Message;
pub use platform::Platform;
pub use runner::{CommandRunner, ProbeMode, SystemRunner, ToolCommand, ToolExit};

/// Shows a [`Message`] using the strategy of a given [`Platform`]
pub struct DialogPresenter<R> {
    runner: R,
}

impl<R: CommandRunner> DialogPresenter<R> {
    /// Presenter launching tools through `runner`
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Show `message`, printing to `console` if the platform has no tool.
    ///
    /// Exactly one strategy runs per call.
    pub fn present<W: Write + ?Sized>(
        &mut self,
        platform: &Platform,
        message: &Message,
        console: &mut W,
    ) -> Result<Presentation, PresenterError> {
        tracing::debug!("Presenting message on platform '{}'", platform);
        platform
            .display_chain(message)
            .execute(&mut self.runner, message, console)
    }

    pub fn into_runner(self) -> R {
        self.runner
    }
}

/// Full program flow.
///
/// Presents `message`, then runs the epilogue. If the presenter fails the
/// error is returned and the epilogue is skipped.
pub fn run<R, I, O>(
    config: &PresenterConfig,
    message: &Message,
    runner: R,
    input: &mut I,
    output: &mut O,
) -> Result<Presentation, PresenterError>
where
    R: CommandRunner,
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    let platform = config.resolved_platform();

    let mut presenter = DialogPresenter::with_runner(runner);
    let presentation = presenter.present(&platform, message, output)?;
    tracing::info!("Presented on {} via {:?}", platform, presentation);

    Epilogue::from_config(config).run(input, output)?;
    Ok(presentation)
}
