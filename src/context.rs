//! Launch settings for the Studio Form app.
//!
//! Parsed once from the command line in `main` and read by the root
//! component.
//!
//! ## Usage
//!
//! ```ignore
//! // In main
//! init_settings(Settings { reduce_motion: args.reduce_motion });
//!
//! // In App
//! let settings = settings();
//! ```

use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Options that shape how the page renders
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Render section headers revealed and skip hover springs
    pub reduce_motion: bool,
}

/// Store the settings for this process; later calls are ignored
pub fn init_settings(settings: Settings) {
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("Settings already initialised, keeping the first value");
    }
}

/// Current settings, or defaults when `init_settings` was never called
pub fn settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}
