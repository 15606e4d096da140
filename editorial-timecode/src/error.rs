//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur while parsing, validating or converting timecodes.
///
/// All of these are input errors: they are reported synchronously and are
/// never worth retrying with the same arguments.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// The timecode string does not have the `hh:mm:ss:ff` shape.
    #[error("Timecode \"{timecode}\" is not in a valid format: {message}")]
    InvalidFormat {
        /// The offending input.
        timecode: String,
        /// What was wrong with it.
        message: String,
    },

    /// The string uses drop-frame notation but the caller asked for non-drop-frame.
    #[error(
        "Timecode \"{timecode}\" uses drop-frame notation but non-drop-frame was requested \
         (non-drop-frame delimiters are ':' and '.')"
    )]
    DropFrameConflict {
        /// The offending input.
        timecode: String,
    },

    /// Drop-frame was requested for a frame rate that has no drop-frame table entry.
    #[error("Drop-frame is not supported at {frame_rate} fps (supported: 23.976, 29.97, 47.952, 59.94)")]
    UnsupportedDropFrameRate {
        /// Display form of the rejected frame rate.
        frame_rate: String,
    },

    /// Minutes or seconds field is 60 or more.
    #[error("Invalid {component} value {value}, it must be smaller than 60")]
    InvalidFieldRange {
        /// Name of the field (`minutes` or `seconds`).
        component: String,
        /// The rejected value.
        value: u32,
    },

    /// Frames field is not smaller than the nominal frame rate.
    #[error("Invalid frame value {frames}, it must be smaller than the {frame_rate} fps nominal rate")]
    InvalidFrameValue {
        /// The rejected frame field.
        frames: u32,
        /// Display form of the frame rate it was checked against.
        frame_rate: String,
    },

    /// A frame rate could not be parsed or is not strictly positive.
    #[error("Invalid frame rate \"{value}\"")]
    InvalidFrameRate {
        /// The rejected input.
        value: String,
    },

    /// A frame number string is not a non-negative integer.
    #[error("Frame number \"{value}\" is not a non-negative integer")]
    InvalidFrameNumber {
        /// The rejected input.
        value: String,
    },

    /// Formatting a frame number and reading it back failed.
    ///
    /// This indicates a bug in the conversion code, not bad input.
    #[error("Frame number {frame_number} can not be converted to a Timecode: {message}")]
    FrameConversion {
        /// The frame number being converted.
        frame_number: u64,
        /// Underlying failure.
        message: String,
    },

    /// Arithmetic produced a frame number below zero.
    #[error("Timecode underflow")]
    Underflow,

    /// Arithmetic produced a frame number that does not fit in 64 bits.
    #[error("Timecode overflow")]
    Overflow,
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(timecode: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            timecode: timecode.into(),
            message: message.into(),
        }
    }

    /// Create a drop-frame conflict error.
    pub fn drop_frame_conflict(timecode: impl Into<String>) -> Self {
        Self::DropFrameConflict {
            timecode: timecode.into(),
        }
    }

    /// Create an unsupported drop-frame rate error.
    pub fn unsupported_drop_frame_rate(frame_rate: impl ToString) -> Self {
        Self::UnsupportedDropFrameRate {
            frame_rate: frame_rate.to_string(),
        }
    }

    /// Create an invalid field range error.
    pub fn invalid_field_range(component: impl Into<String>, value: u32) -> Self {
        Self::InvalidFieldRange {
            component: component.into(),
            value,
        }
    }

    /// Create an invalid frame value error.
    pub fn invalid_frame_value(frames: u32, frame_rate: impl ToString) -> Self {
        Self::InvalidFrameValue {
            frames,
            frame_rate: frame_rate.to_string(),
        }
    }

    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(value: impl Into<String>) -> Self {
        Self::InvalidFrameRate {
            value: value.into(),
        }
    }

    /// Create an invalid frame number error.
    pub fn invalid_frame_number(value: impl Into<String>) -> Self {
        Self::InvalidFrameNumber {
            value: value.into(),
        }
    }

    /// Create a frame conversion error.
    pub fn frame_conversion(frame_number: u64, message: impl Into<String>) -> Self {
        Self::FrameConversion {
            frame_number,
            message: message.into(),
        }
    }
}
