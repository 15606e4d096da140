//! Editorial timecode conversion
//!
//! This crate converts between SMPTE-style timecode labels (`hh:mm:ss:ff`)
//! and absolute frame numbers, including drop-frame counting for the NTSC
//! family of rates:
//!
//! - **Frame rates**: integer, decimal (`29.97`) or ratio (`30000/1001`) rates,
//!   stored exactly
//! - **Drop-frame**: 23.976, 29.97, 47.952 and 59.94 fps
//! - **Timecode values**: validated, comparable by real time, with frame
//!   arithmetic
//!
//! # Quick Start
//!
//! ```rust
//! use editorial_timecode::{FrameRate, Timecode};
//!
//! let tc = Timecode::from_timecode_str("01:00:00:00", FrameRate::FPS_24, None).unwrap();
//! assert_eq!(tc.to_frame(), 86_400);
//!
//! let next = tc.add(24).unwrap();
//! assert_eq!(next.to_string(), "01:00:01:00");
//! ```
//!
//! # Drop-Frame Timecode
//!
//! A `;` or `,` before the frames field marks drop-frame notation:
//!
//! ```rust
//! use editorial_timecode::{frame_from_timecode_str, timecode_from_frame, FrameRate};
//!
//! let fps: FrameRate = "29.97".parse().unwrap();
//! assert_eq!(frame_from_timecode_str("00:01:00;02", fps, None).unwrap(), 1800);
//! assert_eq!(timecode_from_frame(1799, fps, true).unwrap(), "00:00:59;29");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod convert;
pub mod delimiter;
pub mod error;
pub mod framerate;
pub mod parser;
pub mod rational;
pub mod timecode;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use framerate::{drop_frame_settings, DropFrameSettings, FrameRate, DROP_FRAME_TABLE};
pub use parser::{parse_components, TimecodeComponents, MAX_HOURS};
pub use rational::Rational;
pub use timecode::{Offset, Timecode};

// Re-export conversion functions
pub use convert::{
    components_from_frame, frame_from_timecode, frame_from_timecode_str, frames_dropped_until,
    is_dropped_label, timecode_from_frame,
};
pub use delimiter::{frame_delimiter, is_drop_frame_notation, reconcile, resolve_drop_frame};

/// Duration between two timecodes in frames of their own counting.
///
/// Only meaningful when both share a frame rate. Negative if `end` is before
/// `start`.
#[must_use]
pub fn duration_frames(start: &Timecode, end: &Timecode) -> i64 {
    end.to_frame() as i64 - start.to_frame() as i64
}

/// Exact real-time duration between two timecodes in seconds.
///
/// Works across frame rates. Negative if `end` is before `start`.
///
/// # Errors
///
/// [`TimecodeError::Overflow`] if the two rates share so few factors that
/// the exact difference has no 64-bit representation.
pub fn duration_seconds(start: &Timecode, end: &Timecode) -> Result<Rational> {
    end.to_seconds()
        .checked_sub(start.to_seconds())
        .ok_or(TimecodeError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tc(s: &str, fps: FrameRate) -> Timecode {
        Timecode::from_timecode_str(s, fps, None).unwrap()
    }

    #[test]
    fn test_duration_frames() {
        let start = tc("00:00:00:00", FrameRate::FPS_24);
        let end = tc("00:00:01:00", FrameRate::FPS_24);
        assert_eq!(duration_frames(&start, &end), 24);
        assert_eq!(duration_frames(&end, &start), -24);
    }

    #[test]
    fn test_duration_seconds_across_rates() {
        let start = tc("00:00:00:00", FrameRate::FPS_24);
        let end = tc("00:01:00;02", FrameRate::FPS_29_97);
        // 1800 frames at 30000/1001 fps.
        assert_eq!(duration_seconds(&start, &end).unwrap(), Rational::new(3003, 50));
    }

    #[test]
    fn test_negative_duration_seconds() {
        let start = tc("00:01:00:00", FrameRate::FPS_24);
        let end = tc("00:00:00:00", FrameRate::FPS_24);
        assert_eq!(duration_seconds(&start, &end).unwrap(), Rational::from_int(-60));
        assert_eq!(duration_frames(&start, &end), -1440);
    }

    #[test]
    fn test_duration_seconds_between_coprime_rates_overflows() {
        let start = Timecode::from_frame(1, FrameRate::new(4_294_967_291, 1).unwrap(), false).unwrap();
        let end = Timecode::from_frame(1, FrameRate::new(4_294_967_279, 1).unwrap(), false).unwrap();
        assert_eq!(start.to_seconds(), Rational::new(1, 4_294_967_291));
        assert_eq!(duration_seconds(&start, &end).unwrap_err(), TimecodeError::Overflow);
        assert_eq!(duration_seconds(&start, &start).unwrap(), Rational::zero());
    }

    #[test]
    fn test_parse_and_format_roundtrip() {
        let original = "12:34:56:07";
        assert_eq!(tc(original, FrameRate::FPS_24).to_string(), original);
    }

    #[test]
    fn test_drop_frame_parse_roundtrip() {
        let original = "12:34:56;07";
        let parsed = tc(original, FrameRate::FPS_29_97);
        assert!(parsed.drop_frame());
        assert_eq!(parsed.to_string(), original);
    }

    #[test]
    fn test_one_minute_at_every_standard_rate() {
        let frame_rates = [
            FrameRate::FPS_23_976,
            FrameRate::FPS_24,
            FrameRate::FPS_25,
            FrameRate::FPS_29_97,
            FrameRate::FPS_30,
            FrameRate::FPS_48,
            FrameRate::FPS_50,
            FrameRate::FPS_59_94,
            FrameRate::FPS_60,
        ];

        for fps in frame_rates {
            let seconds = tc("00:01:00:00", fps).to_seconds_f64();
            // Fractional rates run slightly longer than a wall-clock minute.
            assert!(
                (seconds - 60.0).abs() < 0.1,
                "Frame rate {} gave {} seconds",
                fps,
                seconds
            );
        }
    }

    #[test]
    fn test_drop_frame_keeps_wall_clock() {
        // One hour of drop-frame labels is within 4ms of one real hour.
        for fps in [FrameRate::FPS_29_97, FrameRate::FPS_59_94] {
            let hour = tc("01:00:00;00", fps).to_seconds_f64();
            assert!((hour - 3600.0).abs() < 0.004, "{fps}: {hour}");
        }
    }

    #[test]
    fn test_drop_frame_roundtrip() {
        for frame in [0, 1, 29, 30, 1799, 1800, 1801, 17982, 107_892] {
            let label = Timecode::from_frame(frame, FrameRate::FPS_29_97, true).unwrap();
            let back = Timecode::from_timecode_str(&label.to_string(), FrameRate::FPS_29_97, None)
                .unwrap();
            assert_eq!(back.to_frame(), frame, "Drop-frame {} roundtrip failed via {}", frame, label);
        }
    }
}
