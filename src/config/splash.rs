//! Splash screen settings.

use std::path::PathBuf;

/// Splash screen shown while the wrapped application starts.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplashSettings {
    /// Path to the splash image, relative to the executable when distributed.
    pub file: Option<PathBuf>,

    /// Close the splash screen as soon as an error or application window
    /// appears, instead of waiting for the timeout.
    ///
    /// Default: true
    pub wait_for_window: bool,

    /// Seconds to keep the splash screen open before closing it.
    ///
    /// Default: 60
    pub timeout: u32,

    /// Show an error message when the application has not started within
    /// the timeout; false closes the splash screen quietly.
    ///
    /// Default: true
    pub timeout_err: bool,
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            file: None,
            wait_for_window: true,
            timeout: 60,
            timeout_err: true,
        }
    }
}
