use thiserror::Error;

/// Reasons a [`crate::config::Config`] cannot drive an animator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("point ring needs at least one point")]
    NoPoints,

    #[error("ring radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("displacement amplitude must not be negative, got {0}")]
    NegativeAmplitude(f64),

    #[error("noise step must be positive, got {0}")]
    NonPositiveNoiseStep(f64),

    #[error("noise offset seed range must be positive, got {0}")]
    EmptySeedRange(f64),

    #[error("config field `{field}` is not finite")]
    NonFinite { field: &'static str },
}
