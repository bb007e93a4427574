//! Error types for the dialog presenter

use std::io;

/// Main error type for presenter operations
#[derive(Debug, thiserror::Error)]
pub enum PresenterError {
    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("Cannot read working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: io::Error,
    },

    #[error("Dialog tool '{tool}' exited with {}", describe_code(.code))]
    ToolFailed { tool: String, code: Option<i32> },

    #[error("Failed to launch '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("No dialog tool available (tried: {})", .tried.join(", "))]
    NoDisplayTool { tried: Vec<String> },

    #[error("Console output failed: {source}")]
    Console {
        #[source]
        source: io::Error,
    },

    #[error("Reading input failed: {source}")]
    Input {
        #[source]
        source: io::Error,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
