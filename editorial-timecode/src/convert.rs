//! Frame number <-> timecode conversion.
//!
//! Drop-frame timecode skips frame *labels*, never frames: at 29.97 fps the
//! labels `;00` and `;01` are skipped at the start of every minute except
//! minutes divisible by ten, so `00:00:59;29` is followed by `00:01:00;02`
//! while `00:09:59;29` is followed by `00:10:00;00`. 59.94 skips four labels
//! per minute instead of two.
//!
//! Both directions use the nominal (rounded) rate for every multiplication;
//! the fractional rate only selects the drop-frame table entry.

use crate::delimiter::{frame_delimiter, resolve_drop_frame};
use crate::error::{Result, TimecodeError};
use crate::framerate::{drop_frame_settings, require_drop_frame_settings, FrameRate};
use crate::parser::{parse_components, TimecodeComponents, MAX_HOURS};

/// Convert timecode fields to a frame number.
///
/// No range checks are applied to the fields; callers that need them use
/// [`TimecodeComponents::validate`] first.
///
/// # Errors
///
/// [`TimecodeError::UnsupportedDropFrameRate`] if `drop_frame` is set for a
/// rate without a drop-frame table entry.
pub fn frame_from_timecode(
    components: &TimecodeComponents,
    frame_rate: FrameRate,
    drop_frame: bool,
) -> Result<u64> {
    let drop_frames_per_minute = if drop_frame {
        require_drop_frame_settings(frame_rate)?.count as u64
    } else {
        0
    };

    let fps = frame_rate.nominal() as u64;
    let hours = components.hours as u64;
    let minutes = components.minutes as u64;
    let seconds = components.seconds as u64;
    let frames = components.frames as u64;

    let frame_number = fps * 3600 * hours + fps * 60 * minutes + fps * seconds + frames;

    // Every elapsed minute except each tenth one has skipped its labels.
    let total_minutes = 60 * hours + minutes;
    let dropped = drop_frames_per_minute * (total_minutes - total_minutes / 10);

    frame_number
        .checked_sub(dropped)
        .ok_or(TimecodeError::Underflow)
}

/// Convert a timecode string to a frame number.
///
/// `drop_frame` is tri-state: `None` follows the string's notation,
/// `Some(_)` is reconciled with it (see [`crate::delimiter::reconcile`]).
pub fn frame_from_timecode_str(
    timecode: &str,
    frame_rate: FrameRate,
    drop_frame: Option<bool>,
) -> Result<u64> {
    let components = parse_components(timecode)?;
    let drop_frame = resolve_drop_frame(timecode, drop_frame)?;
    frame_from_timecode(&components, frame_rate, drop_frame)
}

/// Convert a frame number to timecode fields.
///
/// # Errors
///
/// [`TimecodeError::UnsupportedDropFrameRate`] if `drop_frame` is set for a
/// rate without a drop-frame table entry, [`TimecodeError::Overflow`] if the
/// hours exceed [`MAX_HOURS`] and could not be read back from a label.
pub fn components_from_frame(
    frame_number: u64,
    frame_rate: FrameRate,
    drop_frame: bool,
) -> Result<TimecodeComponents> {
    let (label_number, fps) = if drop_frame {
        let settings = require_drop_frame_settings(frame_rate)?;
        let count = settings.count as u64;

        let ten_minute_chunks = frame_number / settings.fp10m;
        let remaining = frame_number % settings.fp10m;

        // Minute 0 of each ten-minute block keeps its labels; every later
        // minute boundary crossed inside the block adds `count` back.
        let mut add_frames = settings.drops_per_ten_minutes() * ten_minute_chunks;
        if remaining > count {
            add_frames += count * ((remaining - count) / settings.frames_per_drop_minute());
        }

        tracing::trace!(
            frame_number,
            ten_minute_chunks,
            add_frames,
            "drop-frame label adjustment"
        );

        let label_number = frame_number
            .checked_add(add_frames)
            .ok_or(TimecodeError::Overflow)?;
        (label_number, settings.fps_int as u64)
    } else {
        (frame_number, frame_rate.nominal() as u64)
    };

    let hours = label_number / (fps * 3600);
    if hours > MAX_HOURS as u64 {
        return Err(TimecodeError::Overflow);
    }
    Ok(TimecodeComponents {
        hours: hours as u32,
        minutes: ((label_number / (fps * 60)) % 60) as u32,
        seconds: ((label_number / fps) % 60) as u32,
        frames: (label_number % fps) as u32,
    })
}

/// Convert a frame number to a timecode string.
///
/// Drop-frame output uses `;` before the frames field, non-drop-frame `:`.
pub fn timecode_from_frame(frame_number: u64, frame_rate: FrameRate, drop_frame: bool) -> Result<String> {
    let components = components_from_frame(frame_number, frame_rate, drop_frame)?;
    Ok(components.format(frame_delimiter(drop_frame)))
}

/// Whether drop-frame counting never produces this label.
///
/// Such labels (e.g. `00:01:00;00` at 29.97) still convert to a frame number,
/// which is the same as that of the label before them.
#[must_use]
pub fn is_dropped_label(components: &TimecodeComponents, frame_rate: FrameRate) -> bool {
    let settings = match drop_frame_settings(frame_rate) {
        Some(s) => s,
        None => return false,
    };

    components.seconds == 0
        && components.minutes % 10 != 0
        && components.frames < settings.count
}

/// Number of labels skipped before `hours:minutes:00` in drop-frame counting.
#[must_use]
pub fn frames_dropped_until(hours: u32, minutes: u32, frame_rate: FrameRate) -> u64 {
    let settings = match drop_frame_settings(frame_rate) {
        Some(s) => s,
        None => return 0,
    };

    let total_minutes = hours as u64 * 60 + minutes as u64;
    settings.count as u64 * (total_minutes - total_minutes / 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tc(h: u32, m: u32, s: u32, f: u32) -> TimecodeComponents {
        TimecodeComponents::new(h, m, s, f)
    }

    #[test]
    fn test_non_drop_frame_numbers() {
        let fps = FrameRate::FPS_24;
        assert_eq!(frame_from_timecode(&tc(1, 0, 0, 0), fps, false).unwrap(), 86400);
        assert_eq!(
            frame_from_timecode(&tc(1, 30, 45, 12), fps, false).unwrap(),
            3600 * 24 + 30 * 60 * 24 + 45 * 24 + 12
        );
        assert_eq!(timecode_from_frame(86400, fps, false).unwrap(), "01:00:00:00");
        assert_eq!(timecode_from_frame(130332, fps, false).unwrap(), "01:30:30:12");
    }

    #[test]
    fn test_fractional_non_drop_uses_nominal_rate() {
        // 29.97 NDF counts exactly like 30 NDF.
        let ntsc = FrameRate::FPS_29_97;
        assert_eq!(frame_from_timecode(&tc(0, 1, 0, 0), ntsc, false).unwrap(), 1800);
        assert_eq!(timecode_from_frame(1800, ntsc, false).unwrap(), "00:01:00:00");
    }

    #[test]
    fn test_drop_frame_at_minute_boundary() {
        let fps = FrameRate::FPS_29_97;
        assert_eq!(timecode_from_frame(1799, fps, true).unwrap(), "00:00:59;29");
        assert_eq!(timecode_from_frame(1800, fps, true).unwrap(), "00:01:00;02");
        assert_eq!(timecode_from_frame(1801, fps, true).unwrap(), "00:01:00;03");
        assert_eq!(frame_from_timecode(&tc(0, 1, 0, 2), fps, true).unwrap(), 1800);
    }

    #[test]
    fn test_drop_frame_at_ten_minute_boundary() {
        let fps = FrameRate::FPS_29_97;
        assert_eq!(timecode_from_frame(17981, fps, true).unwrap(), "00:09:59;29");
        assert_eq!(timecode_from_frame(17982, fps, true).unwrap(), "00:10:00;00");
        assert_eq!(timecode_from_frame(17983, fps, true).unwrap(), "00:10:00;01");
        assert_eq!(frame_from_timecode(&tc(0, 10, 0, 0), fps, true).unwrap(), 17982);
    }

    #[test]
    fn test_drop_frame_one_hour() {
        let fps = FrameRate::FPS_29_97;
        assert_eq!(frame_from_timecode(&tc(1, 0, 0, 0), fps, true).unwrap(), 107892);
        assert_eq!(timecode_from_frame(107892, fps, true).unwrap(), "01:00:00;00");
    }

    #[test]
    fn test_drop_frame_59_94() {
        let fps = FrameRate::FPS_59_94;
        assert_eq!(timecode_from_frame(3599, fps, true).unwrap(), "00:00:59;59");
        assert_eq!(timecode_from_frame(3600, fps, true).unwrap(), "00:01:00;04");
        assert_eq!(timecode_from_frame(17984, fps, true).unwrap(), "00:05:00;04");
        assert_eq!(timecode_from_frame(35964, fps, true).unwrap(), "00:10:00;00");
    }

    #[test]
    fn test_drop_frame_23_976() {
        let fps = FrameRate::FPS_23_976;
        assert_eq!(timecode_from_frame(1439, fps, true).unwrap(), "00:00:59;23");
        assert_eq!(timecode_from_frame(1440, fps, true).unwrap(), "00:01:00;02");
        assert_eq!(timecode_from_frame(14382, fps, true).unwrap(), "00:10:00;00");
    }

    #[test]
    fn test_decimal_and_ratio_rates_agree() {
        let decimal: FrameRate = "29.97".parse().unwrap();
        for frame in [0, 1799, 1800, 17982, 107892, 1_000_000] {
            assert_eq!(
                timecode_from_frame(frame, decimal, true).unwrap(),
                timecode_from_frame(frame, FrameRate::FPS_29_97, true).unwrap()
            );
        }
    }

    #[test]
    fn test_hours_are_not_wrapped() {
        let fps = FrameRate::FPS_24;
        let frame = 100 * 3600 * 24 + 5;
        assert_eq!(timecode_from_frame(frame, fps, false).unwrap(), "100:00:00:05");
        assert_eq!(frame_from_timecode_str("100:00:00:05", fps, None).unwrap(), frame);
    }

    #[test]
    fn test_hours_beyond_three_digits_overflow() {
        let fps = FrameRate::FPS_24;
        let last = 1000 * 3600 * 24 - 1;
        assert_eq!(timecode_from_frame(last, fps, false).unwrap(), "999:59:59:23");
        assert_eq!(frame_from_timecode_str("999:59:59:23", fps, None).unwrap(), last);
        assert_eq!(
            timecode_from_frame(last + 1, fps, false).unwrap_err(),
            TimecodeError::Overflow
        );
        assert_eq!(
            components_from_frame(u64::MAX, fps, false).unwrap_err(),
            TimecodeError::Overflow
        );

        let ntsc = FrameRate::FPS_29_97;
        let first_past = frame_from_timecode(&tc(1000, 0, 0, 0), ntsc, true).unwrap();
        assert_eq!(
            timecode_from_frame(first_past - 1, ntsc, true).unwrap(),
            "999:59:59;29"
        );
        assert_eq!(
            timecode_from_frame(first_past, ntsc, true).unwrap_err(),
            TimecodeError::Overflow
        );
    }

    #[test]
    fn test_unsupported_drop_frame_rate() {
        let fps = FrameRate::FPS_25;
        let expected = TimecodeError::unsupported_drop_frame_rate("25");
        assert_eq!(timecode_from_frame(0, fps, true).unwrap_err(), expected);
        assert_eq!(frame_from_timecode(&tc(0, 0, 0, 0), fps, true).unwrap_err(), expected);
        assert_eq!(
            frame_from_timecode_str("00:00:00;00", fps, None).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_frame_from_str_reconciles_notation() {
        let fps = FrameRate::FPS_29_97;
        assert_eq!(frame_from_timecode_str("00:01:00;02", fps, None).unwrap(), 1800);
        assert_eq!(frame_from_timecode_str("00:01:00:02", fps, None).unwrap(), 1802);
        assert_eq!(frame_from_timecode_str("00:01:00:02", fps, Some(true)).unwrap(), 1800);
        assert!(matches!(
            frame_from_timecode_str("00:01:00,02", fps, Some(false)),
            Err(TimecodeError::DropFrameConflict { .. })
        ));
    }

    #[test]
    fn test_dropped_labels() {
        let fps = FrameRate::FPS_29_97;
        assert!(is_dropped_label(&tc(0, 1, 0, 0), fps));
        assert!(is_dropped_label(&tc(0, 1, 0, 1), fps));
        assert!(!is_dropped_label(&tc(0, 1, 0, 2), fps));
        assert!(!is_dropped_label(&tc(0, 10, 0, 0), fps));
        assert!(!is_dropped_label(&tc(0, 0, 0, 0), fps));
        assert!(!is_dropped_label(&tc(0, 5, 1, 0), fps));
        assert!(!is_dropped_label(&tc(0, 1, 0, 0), FrameRate::FPS_30));

        assert!(is_dropped_label(&tc(0, 1, 0, 3), FrameRate::FPS_59_94));
    }

    #[test]
    fn test_dropped_label_maps_onto_previous_frame() {
        let fps = FrameRate::FPS_29_97;
        let dropped = frame_from_timecode(&tc(0, 1, 0, 0), fps, true).unwrap();
        let previous = frame_from_timecode(&tc(0, 0, 59, 28), fps, true).unwrap();
        assert_eq!(dropped, previous);
    }

    #[test]
    fn test_frames_dropped_until() {
        let fps = FrameRate::FPS_29_97;
        assert_eq!(frames_dropped_until(0, 0, fps), 0);
        assert_eq!(frames_dropped_until(0, 1, fps), 2);
        assert_eq!(frames_dropped_until(0, 10, fps), 18);
        assert_eq!(frames_dropped_until(0, 11, fps), 20);
        assert_eq!(frames_dropped_until(1, 0, fps), 108);
        assert_eq!(frames_dropped_until(1, 0, FrameRate::FPS_24), 0);
    }

    #[test]
    fn test_drop_frame_sequence_skips_labels() {
        let fps = FrameRate::FPS_29_97;
        for frame in 0..(fps.nominal() as u64 * 60 * 12) {
            let label = components_from_frame(frame, fps, true).unwrap();
            assert!(!is_dropped_label(&label, fps), "frame {frame} produced {label}");
        }
    }
}
