//! Timecode string tokenizing.

use crate::error::{Result, TimecodeError};
use crate::framerate::FrameRate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest hours value a timecode string can carry.
pub const MAX_HOURS: u32 = 999;

// Hours take two or three digits; the other fields exactly two.
static TIMECODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2,3})[:;.,]([0-9]{2})[:;.,]([0-9]{2})[:;.,]([0-9]{2})$")
        .expect("timecode pattern is valid")
});

/// The four numeric fields of a timecode, without any frame rate attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimecodeComponents {
    /// Hours, unbounded above.
    pub hours: u32,
    /// Minutes (0-59)
    pub minutes: u32,
    /// Seconds (0-59)
    pub seconds: u32,
    /// Frames (0 to nominal fps - 1)
    pub frames: u32,
}

impl TimecodeComponents {
    /// Create components from hours, minutes, seconds and frames.
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Check the field ranges against a frame rate.
    ///
    /// Minutes and seconds must be below 60 and frames below the nominal rate.
    pub fn validate(&self, frame_rate: FrameRate) -> Result<()> {
        if self.minutes > 59 {
            return Err(TimecodeError::invalid_field_range("minutes", self.minutes));
        }
        if self.seconds > 59 {
            return Err(TimecodeError::invalid_field_range("seconds", self.seconds));
        }
        if self.frames >= frame_rate.nominal() {
            return Err(TimecodeError::invalid_frame_value(self.frames, frame_rate));
        }
        Ok(())
    }

    /// Format as `hh:mm:ss<delimiter>ff`. Hours wider than two digits are kept.
    #[must_use]
    pub fn format(&self, frame_delimiter: char) -> String {
        format!(
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours, self.minutes, self.seconds, frame_delimiter, self.frames
        )
    }
}

impl From<(u32, u32, u32, u32)> for TimecodeComponents {
    fn from((hours, minutes, seconds, frames): (u32, u32, u32, u32)) -> Self {
        Self::new(hours, minutes, seconds, frames)
    }
}

impl fmt::Display for TimecodeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

/// Split a timecode string into its fields.
///
/// The whole string must match `hh:mm:ss:ff`, where hours have two or three
/// digits and any of `:` `.` `;` `,` may separate the fields. Drop-frame
/// semantics and range checks are not applied here.
pub fn parse_components(timecode: &str) -> Result<TimecodeComponents> {
    let caps = TIMECODE_RE.captures(timecode).ok_or_else(|| {
        TimecodeError::invalid_format(timecode, "expected hh:mm:ss:ff or hh:mm:ss;ff")
    })?;

    let field = |index: usize| -> Result<u32> {
        caps[index]
            .parse()
            .map_err(|_| TimecodeError::invalid_format(timecode, "numeric field out of range"))
    };

    Ok(TimecodeComponents {
        hours: field(1)?,
        minutes: field(2)?,
        seconds: field(3)?,
        frames: field(4)?,
    })
}
