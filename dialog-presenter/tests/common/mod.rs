//! Common test utilities for dialog presenter tests

#![allow(dead_code)]

use dialog_presenter::{CommandRunner, ToolCommand, ToolExit};
use std::collections::HashMap;
use std::io;

/// Initialize tracing for tests (idempotent)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Fake runner: tools listed in `installed` exist and exit with the given
/// status, everything else is reported as not found.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    installed: HashMap<String, ToolExit>,
    pub invocations: Vec<ToolCommand>,
}

impl RecordingRunner {
    /// Runner with no tools installed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark a tool as installed and exiting successfully
    pub fn with_tool(self, program: &str) -> Self {
        self.with_exit(program, ToolExit::Success)
    }

    /// Mark a tool as installed and exiting with `exit`
    pub fn with_exit(mut self, program: &str, exit: ToolExit) -> Self {
        self.installed.insert(program.to_string(), exit);
        self
    }

    /// Programs in the order they were launched
    pub fn programs(&self) -> Vec<&str> {
        self.invocations.iter().map(|c| c.program.as_str()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &ToolCommand) -> io::Result<ToolExit> {
        self.invocations.push(command.clone());
        match self.installed.get(&command.program) {
            Some(exit) => Ok(*exit),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not installed", command.program),
            )),
        }
    }
}

/// Platform identifiers that have no dialog strategy
pub const UNKNOWN_PLATFORMS: &[&str] = &["freebsd", "plan9", "haiku", "solaris"];
