//! Pause, diagnostic line and exit prompt shown after the dialog

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::{PresenterConfig, PresenterError};

/// Line printed once the dialog step is done
pub const DIAGNOSTIC_LINE: &str = "This is a test Rust program that does not exit with 0";

/// Prompt printed before waiting for input
pub const EXIT_PROMPT: &str = "Press Enter to exit";

#[derive(Debug, Clone)]
pub struct Epilogue {
    pause: Duration,
}

impl Epilogue {
    pub fn new(pause: Duration) -> Self {
        Self { pause }
    }

    pub fn from_config(config: &PresenterConfig) -> Self {
        Self::new(config.pause)
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Sleep, print the diagnostic line and prompt, then wait for one line.
    ///
    /// End of input is treated like an empty line.
    pub fn run<I, O>(&self, input: &mut I, output: &mut O) -> Result<(), PresenterError>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        if !self.pause.is_zero() {
            tracing::debug!("Pausing for {:?}", self.pause);
            thread::sleep(self.pause);
        }

        writeln!(output, "{}", DIAGNOSTIC_LINE)
            .and_then(|_| write!(output, "{}", EXIT_PROMPT))
            .and_then(|_| output.flush())
            .map_err(|source| PresenterError::Console { source })?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|source| PresenterError::Input { source })?;
        tracing::debug!("Read {} bytes of input", read);

        Ok(())
    }
}

impl Default for Epilogue {
    fn default() -> Self {
        Self::from_config(&PresenterConfig::default())
    }
}
