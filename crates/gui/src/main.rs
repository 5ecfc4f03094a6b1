//! Rock-Paper-Scissors GUI Application
//!
//! A graphical interface for:
//! - Playing rounds against the configured opponent
//! - Following the score and the result of the last round
//! - Watching the cumulative win rate and the last few moves

mod app;
mod chart;
mod moves_view;
mod styles;

#[cfg(test)]
mod main_tests;

use app::RpsApp;
use iced::application;
use session::{ConfigError, SessionConfig};
use std::path::Path;
use tracing::warn;

/// Settings file picked up from the working directory when present
const CONFIG_FILE: &str = "rps.toml";

fn load_config(path: &Path) -> Result<SessionConfig, ConfigError> {
    if !path.exists() {
        return Ok(SessionConfig::default());
    }
    SessionConfig::load(path)
}

fn main() -> iced::Result {
    // a broken file still gets reported, through the default subscriber
    let config = match load_config(Path::new(CONFIG_FILE)) {
        Ok(config) => {
            config.logging.init();
            config
        }
        Err(e) => {
            let config = SessionConfig::default();
            config.logging.init();
            warn!(error = %e, file = CONFIG_FILE, "using default settings");
            config
        }
    };

    application("AI Pattern Learner - RPS", RpsApp::update, RpsApp::view)
        .theme(RpsApp::theme)
        .window_size(styles::WINDOW_SIZE)
        .run_with(move || RpsApp::new(config))
}
