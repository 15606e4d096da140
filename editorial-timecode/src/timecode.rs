//! The [`Timecode`] value type.
//!
//! A `Timecode` is validated on every construction path and never changes
//! afterwards; arithmetic returns new values.

use crate::convert::{frame_from_timecode, timecode_from_frame};
use crate::delimiter::{frame_delimiter, is_drop_frame_notation, reconcile};
use crate::error::{Result, TimecodeError};
use crate::framerate::{require_drop_frame_settings, FrameRate};
use crate::parser::{parse_components, TimecodeComponents};
use crate::rational::Rational;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An editorial timecode at a given frame rate.
///
/// Equality, ordering and hashing compare the real-time instant
/// ([`Timecode::to_seconds`]), so `01:00:00:00` at 24 fps equals
/// `01:00:00:00` at 25 fps, and the same label written with `;` or `,`
/// compares equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "TimecodeRecord", into = "TimecodeRecord")]
pub struct Timecode {
    components: TimecodeComponents,
    frame_rate: FrameRate,
    drop_frame: bool,
    frame_number: u64,
}

/// Serialized form; deserializing goes back through validation.
#[derive(Serialize, Deserialize)]
struct TimecodeRecord {
    timecode: String,
    fps: FrameRate,
    drop_frame: bool,
}

impl From<Timecode> for TimecodeRecord {
    fn from(tc: Timecode) -> Self {
        Self {
            timecode: tc.to_string(),
            fps: tc.frame_rate,
            drop_frame: tc.drop_frame,
        }
    }
}

impl TryFrom<TimecodeRecord> for Timecode {
    type Error = TimecodeError;

    fn try_from(record: TimecodeRecord) -> Result<Self> {
        Self::from_timecode_str(&record.timecode, record.fps, Some(record.drop_frame))
    }
}

/// Right-hand side of [`Timecode::add`] and [`Timecode::subtract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// Another timecode, contributing its frame number at its own rate.
    Timecode(Timecode),
    /// A signed number of frames.
    Frames(i64),
}

impl From<Timecode> for Offset {
    fn from(tc: Timecode) -> Self {
        Self::Timecode(tc)
    }
}

impl From<&Timecode> for Offset {
    fn from(tc: &Timecode) -> Self {
        Self::Timecode(*tc)
    }
}

impl From<i64> for Offset {
    fn from(frames: i64) -> Self {
        Self::Frames(frames)
    }
}

impl From<i32> for Offset {
    fn from(frames: i32) -> Self {
        Self::Frames(frames as i64)
    }
}

impl From<u32> for Offset {
    fn from(frames: u32) -> Self {
        Self::Frames(frames as i64)
    }
}

impl Timecode {
    /// Parse a timecode string.
    ///
    /// `drop_frame` is tri-state: `None` takes the setting from the frame
    /// delimiter, `Some(true)` forces drop-frame even on `:` notation, and
    /// `Some(false)` rejects `;`/`,` notation with
    /// [`TimecodeError::DropFrameConflict`].
    pub fn from_timecode_str(
        timecode: &str,
        frame_rate: FrameRate,
        drop_frame: Option<bool>,
    ) -> Result<Self> {
        let notation = is_drop_frame_notation(timecode)?;
        let components = parse_components(timecode)?;
        let drop_frame = reconcile(timecode, notation, drop_frame)?;
        Self::checked(components, frame_rate, drop_frame)
    }

    /// Build a timecode for a frame number.
    ///
    /// # Errors
    ///
    /// [`TimecodeError::Overflow`] if the label would need more than three
    /// hour digits ([`crate::MAX_HOURS`]).
    pub fn from_frame(frame_number: u64, frame_rate: FrameRate, drop_frame: bool) -> Result<Self> {
        let formatted = timecode_from_frame(frame_number, frame_rate, drop_frame)?;

        // The formatter always produces a valid label; anything else is a bug.
        let components = parse_components(&formatted)
            .and_then(|components| components.validate(frame_rate).map(|()| components))
            .map_err(|e| TimecodeError::frame_conversion(frame_number, e.to_string()))?;

        Ok(Self {
            components,
            frame_rate,
            drop_frame,
            frame_number,
        })
    }

    /// Build a timecode from a frame number given as a string of digits.
    ///
    /// An unset `drop_frame` means non-drop-frame.
    pub fn from_frame_number(
        frame_number: &str,
        frame_rate: FrameRate,
        drop_frame: Option<bool>,
    ) -> Result<Self> {
        if frame_number.is_empty() || !frame_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimecodeError::invalid_frame_number(frame_number));
        }
        let value: u64 = frame_number
            .parse()
            .map_err(|_| TimecodeError::invalid_frame_number(frame_number))?;
        Self::from_frame(value, frame_rate, drop_frame.unwrap_or(false))
    }

    /// Build a timecode from its fields.
    ///
    /// The fields are range-checked, converted to a frame number and back, so
    /// a drop-frame label that is never produced (`00:01:00;00` at 29.97)
    /// comes back as the label of the same frame (`00:00:59;28`).
    pub fn from_components(
        components: TimecodeComponents,
        frame_rate: FrameRate,
        drop_frame: bool,
    ) -> Result<Self> {
        let checked = Self::checked(components, frame_rate, drop_frame)?;
        Self::from_frame(checked.frame_number, frame_rate, drop_frame)
    }

    fn checked(components: TimecodeComponents, frame_rate: FrameRate, drop_frame: bool) -> Result<Self> {
        if drop_frame {
            require_drop_frame_settings(frame_rate)?;
        }
        components.validate(frame_rate)?;
        let frame_number = frame_from_timecode(&components, frame_rate, drop_frame)?;
        Ok(Self {
            components,
            frame_rate,
            drop_frame,
            frame_number,
        })
    }

    /// Hours field.
    #[must_use]
    pub fn hours(&self) -> u32 {
        self.components.hours
    }

    /// Minutes field.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.components.minutes
    }

    /// Seconds field.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.components.seconds
    }

    /// Frames field.
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.components.frames
    }

    /// All four fields.
    #[must_use]
    pub fn components(&self) -> TimecodeComponents {
        self.components
    }

    /// The frame rate this timecode counts in.
    #[must_use]
    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    /// Whether this timecode uses drop-frame counting.
    #[must_use]
    pub fn drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// The delimiter written before the frames field: `;` or `:`.
    #[must_use]
    pub fn frame_delimiter(&self) -> char {
        frame_delimiter(self.drop_frame)
    }

    /// The absolute frame number.
    #[must_use]
    pub fn to_frame(&self) -> u64 {
        self.frame_number
    }

    /// Elapsed real time in seconds: frame number divided by the frame rate,
    /// exactly.
    #[must_use]
    pub fn to_seconds(&self) -> Rational {
        // Hours are capped at 999, so the value stays below 7.2e6 seconds and
        // its reduced denominator divides a u32 numerator: both terms fit.
        Rational::from_int(self.frame_number as i64) / self.frame_rate.as_rational()
    }

    /// [`Timecode::to_seconds`] as a float, for display.
    #[must_use]
    pub fn to_seconds_f64(&self) -> f64 {
        self.to_seconds().to_f64()
    }

    /// Add a timecode or a frame count.
    ///
    /// The result keeps this timecode's frame rate and drop-frame setting. A
    /// timecode operand contributes its own frame number unchanged, even when
    /// its frame rate differs; no real-time rescaling takes place.
    pub fn add(&self, rhs: impl Into<Offset>) -> Result<Self> {
        let delta = Self::offset_frames(rhs.into());
        self.offset_by(delta)
    }

    /// Subtract a timecode or a frame count. Same rate rules as [`Timecode::add`].
    ///
    /// # Errors
    ///
    /// [`TimecodeError::Underflow`] if the result would precede frame zero.
    pub fn subtract(&self, rhs: impl Into<Offset>) -> Result<Self> {
        let delta = Self::offset_frames(rhs.into());
        self.offset_by(-delta)
    }

    fn offset_frames(offset: Offset) -> i128 {
        match offset {
            Offset::Timecode(other) => other.frame_number as i128,
            Offset::Frames(frames) => frames as i128,
        }
    }

    fn offset_by(&self, delta: i128) -> Result<Self> {
        let total = self.frame_number as i128 + delta;
        if total < 0 {
            return Err(TimecodeError::Underflow);
        }
        let total = u64::try_from(total).map_err(|_| TimecodeError::Overflow)?;
        Self::from_frame(total, self.frame_rate, self.drop_frame)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.components.format(self.frame_delimiter()))
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    /// Parse at the default 24 fps, drop-frame taken from the notation.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_timecode_str(s, FrameRate::default(), None)
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.to_seconds() == other.to_seconds()
    }
}

impl Eq for Timecode {}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_seconds().hash(state);
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_seconds().cmp(&other.to_seconds())
    }
}
