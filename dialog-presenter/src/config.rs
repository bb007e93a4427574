//! Presenter configuration
//!
//! There are no command line flags. Defaults can be overridden through
//! environment variables, see [`PresenterConfig::from_env`].

use std::env;
use std::time::Duration;

use crate::runner::ProbeMode;
use crate::{Platform, PresenterError};

pub const TITLE_VAR: &str = "CWD_DIALOG_TITLE";
pub const PAUSE_MS_VAR: &str = "CWD_DIALOG_PAUSE_MS";
pub const PLATFORM_VAR: &str = "CWD_DIALOG_PLATFORM";
pub const PROBE_VAR: &str = "CWD_DIALOG_PROBE";

pub const DEFAULT_TITLE: &str = "Test Rust";
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(2);

/// Everything the `cwd-dialog` run can be tuned with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterConfig {
    /// Dialog window title
    pub title: String,
    /// Sleep between the dialog and the exit prompt
    pub pause: Duration,
    /// Platform override (None = detect the host)
    pub platform: Option<Platform>,
    /// How missing tools are detected
    pub probe: ProbeMode,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            pause: DEFAULT_PAUSE,
            platform: None,
            probe: ProbeMode::default(),
        }
    }
}

impl PresenterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialog title
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Set the pause before the exit prompt
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Force a platform instead of detecting it
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Set the tool probe mode
    pub fn probe(mut self, probe: ProbeMode) -> Self {
        self.probe = probe;
        self
    }

    /// Configured platform, or the host's
    pub fn resolved_platform(&self) -> Platform {
        self.platform.clone().unwrap_or_else(Platform::detect)
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, PresenterError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PresenterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(title) = lookup(TITLE_VAR) {
            config.title = title;
        }

        if let Some(raw) = lookup(PAUSE_MS_VAR) {
            let millis: u64 = raw.trim().parse().map_err(|_| PresenterError::InvalidConfig {
                details: format!("{} must be a whole number of milliseconds, got '{}'", PAUSE_MS_VAR, raw),
            })?;
            config.pause = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(PLATFORM_VAR) {
            if raw.trim().is_empty() {
                return Err(PresenterError::InvalidConfig {
                    details: format!("{} is set but empty", PLATFORM_VAR),
                });
            }
            config.platform = Some(Platform::from_os(&raw));
        }

        if let Some(raw) = lookup(PROBE_VAR) {
            config.probe = ProbeMode::parse(&raw).ok_or_else(|| PresenterError::InvalidConfig {
                details: format!("{} must be 'spawn' or 'path', got '{}'", PROBE_VAR, raw),
            })?;
        }

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}
