//! Error types for animation construction and driving.

use serde::{Deserialize, Serialize};

/// Errors raised at construction, `start` or driver boundaries.
///
/// The per-frame [`Animation::update`](crate::Animation::update) path never
/// produces one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// A sequence was configured without children.
    #[error("Invalid configuration: sequence has no children")]
    EmptySequence,

    /// Negative or non-finite duration.
    #[error("Invalid configuration: duration {duration} must be finite and >= 0")]
    InvalidDuration { duration: f32 },

    /// Negative or non-finite frame delta handed to the driver.
    #[error("Invalid frame delta: {dt}")]
    InvalidDelta { dt: f32 },

    /// Easing name not recognised when loading data.
    #[error("Invalid configuration: unknown easing '{name}'")]
    UnknownEasing { name: String },

    /// Director handle does not exist (never added, finished or cancelled).
    #[error("Animation not found: {id}")]
    AnimationNotFound { id: u32 },

    /// JSON loading failure.
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl AnimationError {
    /// Whether this error is part of the "invalid configuration" class.
    #[inline]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::EmptySequence | Self::InvalidDuration { .. } | Self::UnknownEasing { .. }
        )
    }

    /// Get error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptySequence | Self::InvalidDuration { .. } | Self::UnknownEasing { .. } => {
                "config"
            }
            Self::InvalidDelta { .. } => "timing",
            Self::AnimationNotFound { .. } => "director",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Checks a duration supplied at construction time.
pub(crate) fn check_duration(duration: f32) -> Result<f32> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(duration)
    } else {
        Err(AnimationError::InvalidDuration { duration })
    }
}

/// Crate result type.
pub type Result<T> = core::result::Result<T, AnimationError>;
