//! Ordered tool fallback
//!
//! A [`FallbackChain`] tries its candidates in order. Only a missing
//! executable moves on to the next candidate; once a tool is found its
//! outcome is final. When every candidate is missing the chain's
//! [`Terminal`] decides between printing to the console and failing.

use std::io::{self, Write};

use crate::runner::{CommandRunner, ToolCommand, ToolExit};
use crate::{Message, PresenterError};

/// What a non-zero exit from a found tool means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Non-zero exit is a hard failure
    Strict,
    /// Non-zero exit is logged and the message counts as shown
    Lenient,
}

/// One tool the chain may try
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub command: ToolCommand,
    pub policy: ExitPolicy,
}

/// Action taken once every candidate turned out to be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Print the message text to the console
    Console,
    /// Fail with [`PresenterError::NoDisplayTool`]
    Unavailable,
}

/// Where the message ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Shown by the named tool
    Dialog { tool: String },
    /// Printed to the console
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    candidates: Vec<Candidate>,
    terminal: Terminal,
}

impl FallbackChain {
    pub fn new(terminal: Terminal) -> Self {
        Self {
            candidates: Vec::new(),
            terminal,
        }
    }

    /// Chain that prints straight to the console without trying any tool
    pub fn console_only() -> Self {
        Self::new(Terminal::Console)
    }

    /// Append a candidate tried after all previously added ones
    pub fn candidate(mut self, command: ToolCommand, policy: ExitPolicy) -> Self {
        self.candidates.push(Candidate { command, policy });
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    /// Present `message` using the first available candidate
    pub fn execute<R, W>(
        &self,
        runner: &mut R,
        message: &Message,
        console: &mut W,
    ) -> Result<Presentation, PresenterError>
    where
        R: CommandRunner + ?Sized,
        W: Write + ?Sized,
    {
        for candidate in &self.candidates {
            let tool = &candidate.command.program;
            tracing::debug!("Trying dialog tool '{}'", tool);

            match runner.run(&candidate.command) {
                Ok(ToolExit::Success) => {
                    tracing::info!("Message shown with '{}'", tool);
                    return Ok(Presentation::Dialog { tool: tool.clone() });
                }
                Ok(ToolExit::Failed { code }) => match candidate.policy {
                    ExitPolicy::Strict => {
                        return Err(PresenterError::ToolFailed {
                            tool: tool.clone(),
                            code,
                        });
                    }
                    ExitPolicy::Lenient => {
                        tracing::warn!("Dialog tool '{}' exited with {:?}", tool, code);
                        return Ok(Presentation::Dialog { tool: tool.clone() });
                    }
                },
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!("Dialog tool '{}' not found", tool);
                }
                Err(source) => {
                    return Err(PresenterError::Spawn {
                        tool: tool.clone(),
                        source,
                    });
                }
            }
        }

        match self.terminal {
            Terminal::Console => {
                writeln!(console, "{}", message.text())
                    .and_then(|_| console.flush())
                    .map_err(|source| PresenterError::Console { source })?;
                tracing::info!("Message printed to console");
                Ok(Presentation::Console)
            }
            Terminal::Unavailable => Err(PresenterError::NoDisplayTool {
                tried: self
                    .candidates
                    .iter()
                    .map(|c| c.command.program.clone())
                    .collect(),
            }),
        }
    }
}
