//! Platform detection and per-platform display strategies
//!
//! Strategies are selected at runtime from a [`Platform`] value rather than
//! by `cfg`, so every branch can be built and inspected on any host.

use std::fmt;

use crate::fallback::FallbackChain;
use crate::Message;

mod linux;
mod macos;
mod windows;

/// Host platform families with a native dialog strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    /// Any other host, named by its identifier
    Other(String),
}

impl Platform {
    /// Platform of the running process
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a host identifier to a platform.
    ///
    /// Matches case-insensitively by substring, so Rust's
    /// `std::env::consts::OS` values work as well as the host triples other
    /// runtimes report (`linux-gnu`, `darwin23.1.0`, `mswin64_140`, ...).
    pub fn from_os(os: &str) -> Self {
        let normalized = os.trim().to_ascii_lowercase();
        let has = |needle: &str| normalized.contains(needle);

        // "darwin" contains "win", so it is checked before the Windows names
        if has("darwin") || has("macos") || has("osx") {
            Platform::MacOs
        } else if has("linux") {
            Platform::Linux
        } else if normalized == "windows"
            || has("mswin")
            || has("mingw")
            || has("cygwin")
            || has("win32")
            || has("win64")
        {
            Platform::Windows
        } else {
            Platform::Other(os.trim().to_string())
        }
    }

    /// Fallback chain used to show `message` on this platform
    pub fn display_chain(&self, message: &Message) -> FallbackChain {
        match self {
            Platform::MacOs => macos::display_chain(message),
            Platform::Linux => linux::display_chain(message),
            Platform::Windows => windows::display_chain(message),
            Platform::Other(_) => FallbackChain::console_only(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
            Platform::Windows => write!(f, "windows"),
            Platform::Other(name) => write!(f, "{}", name),
        }
    }
}
