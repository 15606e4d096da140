//! Drop-frame notation detection.
//!
//! The separator in front of the frames field tells whether a timecode string
//! is written in drop-frame notation:
//!
//! | Delimiter | Notation       |
//! |-----------|----------------|
//! | `:` `.`   | non-drop-frame |
//! | `;` `,`   | drop-frame     |
//!
//! Notation alone does not decide the effective setting; see [`reconcile`].

use crate::error::{Result, TimecodeError};

/// Delimiter written before the frames field of drop-frame timecodes.
pub const DROP_FRAME_DELIMITER: char = ';';

/// Delimiter written before the frames field of non-drop-frame timecodes.
pub const NON_DROP_FRAME_DELIMITER: char = ':';

/// Frame delimiters that signal drop-frame notation.
pub const DROP_FRAME_DELIMITERS: [char; 2] = [';', ','];

/// Frame delimiters that signal non-drop-frame notation.
pub const NON_DROP_FRAME_DELIMITERS: [char; 2] = [':', '.'];

/// The canonical frame delimiter for a drop-frame setting.
#[must_use]
pub fn frame_delimiter(drop_frame: bool) -> char {
    if drop_frame {
        DROP_FRAME_DELIMITER
    } else {
        NON_DROP_FRAME_DELIMITER
    }
}

/// Whether the string's frame delimiter indicates drop-frame notation.
///
/// Only the tail of the string is inspected: it must end with one of the
/// [`DROP_FRAME_DELIMITERS`] or [`NON_DROP_FRAME_DELIMITERS`] followed by
/// exactly two ASCII digits. The rest of the
/// string is left to the parser.
pub fn is_drop_frame_notation(timecode: &str) -> Result<bool> {
    let bytes = timecode.as_bytes();
    let tail = bytes.len().checked_sub(3).map(|start| &bytes[start..]);

    match tail {
        Some([delimiter, tens, units]) if tens.is_ascii_digit() && units.is_ascii_digit() => {
            let delimiter = *delimiter as char;
            if DROP_FRAME_DELIMITERS.contains(&delimiter) {
                Ok(true)
            } else if NON_DROP_FRAME_DELIMITERS.contains(&delimiter) {
                Ok(false)
            } else {
                Err(missing_delimiter(timecode))
            }
        }
        _ => Err(missing_delimiter(timecode)),
    }
}

fn missing_delimiter(timecode: &str) -> TimecodeError {
    TimecodeError::invalid_format(
        timecode,
        "the frames field must be two digits delimited by one of ':', '.', ';' or ','",
    )
}

/// Combine the notation found in a string with the caller's explicit request.
///
/// - No request: the notation decides.
/// - Drop-frame notation with an explicit non-drop-frame request is an error.
/// - Non-drop-frame notation with an explicit drop-frame request is accepted
///   as drop-frame; callers are not required to know the `;` convention.
pub fn reconcile(timecode: &str, notation_drop_frame: bool, requested: Option<bool>) -> Result<bool> {
    match (notation_drop_frame, requested) {
        (true, Some(false)) => Err(TimecodeError::drop_frame_conflict(timecode)),
        (false, Some(true)) => {
            tracing::warn!(
                timecode = %timecode,
                "treating non-drop-frame notation as drop-frame as requested"
            );
            Ok(true)
        }
        (notation, _) => Ok(notation),
    }
}

/// Classify the string and reconcile it with the caller's request in one step.
pub fn resolve_drop_frame(timecode: &str, requested: Option<bool>) -> Result<bool> {
    let notation = is_drop_frame_notation(timecode)?;
    reconcile(timecode, notation, requested)
}
