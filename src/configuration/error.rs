use thiserror::Error;

/// Errors raised while loading or acquiring initial conditions.
/// The simulation core itself never fails; everything here happens before it runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("mass out of range: {0} kg (expected 0 < m <= 10)")]
    MassOutOfRange(f64),

    #[error("length out of range: {0} cm (expected 10 <= l <= 100)")]
    LengthOutOfRange(f64),

    #[error("angle out of range: {0} deg (expected 0 <= a <= 180)")]
    AngleOutOfRange(f64),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("duration must be non-negative and finite, got {0}")]
    InvalidDuration(f64),

    #[error("scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("{0} steps requested (duration / dt), at most {max} allowed", max = crate::configuration::config::MAX_STEPS)]
    TooManySteps(f64),

    #[error("window size must be non-zero, got {0}x{1}")]
    InvalidWindowSize(u32, u32),

    #[error("frame rate must be positive and finite, got {0}")]
    InvalidFrameRate(f64),

    #[error("pivot size must be positive and finite, got {0}")]
    InvalidPivotSize(f64),

    #[error("enter a number")]
    EmptyInput,

    #[error("too long")]
    InputTooLong,

    #[error("non-number character in {0:?}")]
    NotANumber(String),

    #[error("input closed before all initial conditions were given")]
    InputClosed,

    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    /// Mistakes a user can fix by answering the prompts again
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            ConfigError::InputClosed | ConfigError::Io(_) | ConfigError::Yaml(_)
        )
    }
}
