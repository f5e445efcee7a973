use pocket_config::ConfigError;
use pocket_services::CoreError;
use thiserror::Error;

/// Error type that captures failures surfaced by the tracker facade.
#[derive(Debug, Error)]
pub enum PocketError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("No preferences store is attached to this tracker")]
    PreferencesUnavailable,
}
