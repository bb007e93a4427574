//! Launching external dialog tools
//!
//! A [`CommandRunner`] reports one of three outcomes for a [`ToolCommand`]:
//! the tool ran (`Ok(ToolExit)`), the tool does not exist (`Err` with
//! [`io::ErrorKind::NotFound`]), or launching it failed for another reason
//! (any other `Err`).

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A dialog tool invocation: program name plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Program to execute, looked up on `PATH`
    pub program: String,
    /// Command line arguments
    pub args: Vec<String>,
}

impl ToolCommand {
    /// Create a new invocation of the given program
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add a single argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add command line arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(|s| s.into()));
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}

/// How a tool that was found finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolExit {
    /// Exit status zero
    Success,
    /// Non-zero exit, or killed by a signal (`code: None`)
    Failed { code: Option<i32> },
}

/// Runs dialog tools on behalf of a fallback chain
pub trait CommandRunner {
    /// Run the command to completion.
    ///
    /// A missing executable must be reported as an error of kind
    /// [`io::ErrorKind::NotFound`].
    fn run(&mut self, command: &ToolCommand) -> io::Result<ToolExit>;
}

/// How the system runner decides a tool is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMode {
    /// Attempt the spawn; a `NotFound` spawn error means absent
    #[default]
    Spawn,
    /// Resolve the program on `PATH` first; no spawn happens when it is missing
    SearchPath,
}

impl ProbeMode {
    /// Parse the configuration spelling (`spawn` or `path`)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spawn" => Some(ProbeMode::Spawn),
            "path" | "search-path" | "which" => Some(ProbeMode::SearchPath),
            _ => None,
        }
    }
}

/// Runner that launches real processes and waits for them
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    probe: ProbeMode,
}

impl SystemRunner {
    pub fn new(probe: ProbeMode) -> Self {
        Self { probe }
    }

    fn resolve(&self, program: &str) -> io::Result<PathBuf> {
        match self.probe {
            ProbeMode::Spawn => Ok(PathBuf::from(program)),
            ProbeMode::SearchPath => which::which(program).map_err(|e| {
                io::Error::new(io::ErrorKind::NotFound, format!("{}: {}", program, e))
            }),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ToolCommand) -> io::Result<ToolExit> {
        let program = self.resolve(&command.program)?;
        tracing::debug!("Launching {} ({:?})", command, program);

        let status = Command::new(&program)
            .args(&command.args)
            .stdin(Stdio::null())
            .status()?;

        if status.success() {
            Ok(ToolExit::Success)
        } else {
            Ok(ToolExit::Failed {
                code: status.code(),
            })
        }
    }
}
