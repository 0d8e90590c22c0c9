//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// Invalid timecode format in string.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// Invalid frame rate.
    #[error("Invalid frame rate: {numerator}/{denominator}")]
    InvalidFrameRate {
        /// Frame rate numerator.
        numerator: u32,
        /// Frame rate denominator.
        denominator: u32,
    },

    /// Underflow during checked timecode arithmetic.
    #[error("Timecode underflow")]
    Underflow,
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(numerator: u32, denominator: u32) -> Self {
        Self::InvalidFrameRate {
            numerator,
            denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimecodeError::invalid_format("expected four colon-separated fields");
        assert_eq!(
            err.to_string(),
            "Invalid timecode format: expected four colon-separated fields"
        );

        let err = TimecodeError::invalid_frame_rate(30, 0);
        assert_eq!(err.to_string(), "Invalid frame rate: 30/0");

        let err = TimecodeError::Underflow;
        assert_eq!(err.to_string(), "Timecode underflow");
    }

    #[test]
    fn test_error_serialization() {
        let err = TimecodeError::invalid_format("test error");
        let json = serde_json::to_string(&err).unwrap();
        let decoded: TimecodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, decoded);
    }
}
