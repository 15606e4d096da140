//! Frame rates and the drop-frame eligibility table.
//!
//! A [`FrameRate`] is an exact fraction. Editorial tables usually spell the
//! NTSC rates as decimals (`29.97`) while containers store them as ratios
//! (`30000/1001`); both spellings resolve to the same drop-frame entry because
//! the table is keyed on the rate rounded to the nearest thousandth.

use crate::error::{Result, TimecodeError};
use crate::rational::{gcd, Rational};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Most fractional digits accepted in a decimal frame rate.
const MAX_DECIMALS: usize = 6;

/// A frame rate in frames per second, stored as a reduced fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFrameRate")]
pub struct FrameRate {
    num: u32,
    den: u32,
}

#[derive(Deserialize)]
struct RawFrameRate {
    num: u32,
    den: u32,
}

impl TryFrom<RawFrameRate> for FrameRate {
    type Error = TimecodeError;

    fn try_from(raw: RawFrameRate) -> Result<Self> {
        Self::new(raw.num, raw.den)
    }
}

impl FrameRate {
    /// 23.976 fps (24000/1001, NTSC film)
    pub const FPS_23_976: Self = Self::from_parts(24000, 1001);
    /// 24 fps (film)
    pub const FPS_24: Self = Self::from_parts(24, 1);
    /// 25 fps (PAL)
    pub const FPS_25: Self = Self::from_parts(25, 1);
    /// 29.97 fps (30000/1001, NTSC)
    pub const FPS_29_97: Self = Self::from_parts(30000, 1001);
    /// 30 fps
    pub const FPS_30: Self = Self::from_parts(30, 1);
    /// 47.952 fps (48000/1001)
    pub const FPS_47_952: Self = Self::from_parts(48000, 1001);
    /// 48 fps (HFR film)
    pub const FPS_48: Self = Self::from_parts(48, 1);
    /// 50 fps (PAL)
    pub const FPS_50: Self = Self::from_parts(50, 1);
    /// 59.94 fps (60000/1001, NTSC)
    pub const FPS_59_94: Self = Self::from_parts(60000, 1001);
    /// 60 fps
    pub const FPS_60: Self = Self::from_parts(60, 1);

    const fn from_parts(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Create a frame rate from a numerator and denominator.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(TimecodeError::invalid_frame_rate(format!(
                "{}/{}",
                numerator, denominator
            )));
        }
        let g = gcd(numerator as u128, denominator as u128) as u32;
        let rate = Self {
            num: numerator / g,
            den: denominator / g,
        };
        // At half a frame per second or less there is no frames field to count in.
        if rate.nominal() == 0 {
            return Err(TimecodeError::invalid_frame_rate(format!(
                "{}/{}",
                numerator, denominator
            )));
        }
        Ok(rate)
    }

    /// Create an integer frame rate.
    pub fn from_int(fps: u32) -> Result<Self> {
        Self::new(fps, 1)
    }

    /// Frame rate numerator.
    #[must_use]
    pub fn numerator(&self) -> u32 {
        self.num
    }

    /// Frame rate denominator.
    #[must_use]
    pub fn denominator(&self) -> u32 {
        self.den
    }

    /// The frame rate as an exact rational.
    #[must_use]
    pub fn as_rational(&self) -> Rational {
        Rational::new(self.num as i64, self.den as i64)
    }

    /// The nominal integer rate: the frame rate rounded to the nearest
    /// integer, halves to even (12.5 -> 12, 13.5 -> 14). This is the modulus
    /// of the frames field and the multiplier for every timecode field.
    #[must_use]
    pub fn nominal(&self) -> u32 {
        round_half_even(self.num as u64, self.den as u64)
    }

    /// The rate in thousandths of a frame per second, rounded like
    /// [`FrameRate::nominal`].
    #[must_use]
    pub fn millis(&self) -> u32 {
        round_half_even(self.num as u64 * 1000, self.den as u64)
    }

    /// Whether this rate has an entry in the drop-frame table.
    #[must_use]
    pub fn is_drop_frame_eligible(&self) -> bool {
        drop_frame_settings(*self).is_some()
    }
}

fn round_half_even(num: u64, den: u64) -> u32 {
    let quotient = num / den;
    let twice_remainder = 2 * (num % den);
    let rounded = match twice_remainder.cmp(&den) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient & 1),
    };
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_24
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            return write!(f, "{}", self.num);
        }
        let millis = self.millis();
        let whole = millis / 1000;
        let fraction = millis % 1000;
        if fraction == 0 {
            write!(f, "{}", whole)
        } else {
            let digits = format!("{:03}", fraction);
            write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for FrameRate {
    type Err = TimecodeError;

    /// Accepts `24`, `29.97` or `30000/1001`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || TimecodeError::invalid_frame_rate(s);

        if let Some((num, den)) = s.split_once('/') {
            let num: u32 = num.trim().parse().map_err(|_| invalid())?;
            let den: u32 = den.trim().parse().map_err(|_| invalid())?;
            return Self::new(num, den).map_err(|_| invalid());
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (s, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }
        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > MAX_DECIMALS {
            return Err(invalid());
        }

        let den = 10u64.pow(fraction.len() as u32);
        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| invalid())?
        };
        let num = whole
            .checked_mul(den)
            .and_then(|n| n.checked_add(fraction))
            .ok_or_else(invalid)?;
        let g = gcd(num as u128, den as u128) as u64;
        let num = u32::try_from(num / g).map_err(|_| invalid())?;
        let den = u32::try_from(den / g).map_err(|_| invalid())?;
        Self::new(num, den).map_err(|_| invalid())
    }
}

impl TryFrom<f64> for FrameRate {
    type Error = TimecodeError;

    /// Converts through the shortest decimal spelling of the float, so
    /// `29.97_f64` becomes exactly 2997/100 rather than its binary expansion.
    fn try_from(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(TimecodeError::invalid_frame_rate(fps.to_string()));
        }
        fps.to_string().parse()
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = TimecodeError;

    fn try_from(fps: u32) -> Result<Self> {
        Self::from_int(fps)
    }
}

/// Constants for the drop-frame arithmetic at one frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropFrameSettings {
    /// Frame rate in thousandths of a frame per second (table key).
    pub millis: u32,
    /// Frame labels dropped at the start of every minute not divisible by ten.
    pub count: u32,
    /// Nominal integer rate.
    pub fps_int: u32,
    /// Frames actually present in ten minutes: `fps_int * 600 - 9 * count`.
    pub fp10m: u64,
}

impl DropFrameSettings {
    /// Frames in a minute that drops labels: `fps_int * 60 - count`.
    #[must_use]
    pub fn frames_per_drop_minute(&self) -> u64 {
        self.fps_int as u64 * 60 - self.count as u64
    }

    /// Labels dropped across one ten-minute block (minutes 1 through 9).
    #[must_use]
    pub fn drops_per_ten_minutes(&self) -> u64 {
        self.count as u64 * 9
    }
}

/// The rates drop-frame counting is defined for.
pub static DROP_FRAME_TABLE: [DropFrameSettings; 4] = [
    DropFrameSettings {
        millis: 23_976,
        count: 2,
        fps_int: 24,
        fp10m: 14_382,
    },
    DropFrameSettings {
        millis: 29_970,
        count: 2,
        fps_int: 30,
        fp10m: 17_982,
    },
    DropFrameSettings {
        millis: 47_952,
        count: 4,
        fps_int: 48,
        fp10m: 28_764,
    },
    DropFrameSettings {
        millis: 59_940,
        count: 4,
        fps_int: 60,
        fp10m: 35_964,
    },
];

/// Look up the drop-frame constants for a frame rate.
#[must_use]
pub fn drop_frame_settings(frame_rate: FrameRate) -> Option<&'static DropFrameSettings> {
    let millis = frame_rate.millis();
    DROP_FRAME_TABLE.iter().find(|entry| entry.millis == millis)
}

/// Look up the drop-frame constants, failing for ineligible rates.
pub fn require_drop_frame_settings(frame_rate: FrameRate) -> Result<&'static DropFrameSettings> {
    drop_frame_settings(frame_rate)
        .ok_or_else(|| TimecodeError::unsupported_drop_frame_rate(frame_rate))
}
