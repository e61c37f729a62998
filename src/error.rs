use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or configuring a simulation.
///
/// Stepping a world never fails; only construction and configuration do.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction or configuration parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A ball could not be placed without overlap within the retry cap.
    #[error("cannot place ball {index} without overlap after {attempts} attempts; lower the ball count or enlarge the viewport")]
    PlacementFailed { index: usize, attempts: u64 },

    /// Malformed YAML configuration.
    #[error("config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
