//! Core types and rules for the Ralli admin console

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use catalog::{SPORTS, Sport};
pub use config::Config;
pub use error::{Error, Result};
pub use types::{
    Game, GameAction, GameStatus, Host, Line, LineOutcome, LineStatus, Player, RecordId,
    StatType, Tab,
};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(logging: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let (json, text) = if logging.is_json() {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()
        .map_err(|e| Error::Configuration {
            message: format!("failed to install log subscriber: {e}"),
        })
}
