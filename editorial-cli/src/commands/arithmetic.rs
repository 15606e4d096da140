//! Timecode addition and subtraction commands.

use super::{emit, RateArgs, TimecodeReport};
use anyhow::Context;
use clap::Args;
use editorial_timecode::{FrameRate, Offset, Timecode};

/// Add a timecode or frame count to a timecode.
#[derive(Args, Debug)]
pub struct CmdAdd {
    /// Left-hand timecode; its rate and drop-frame setting carry to the result.
    pub timecode: String,

    /// A frame count (`-12`, `48`) or another timecode at the same rate.
    #[arg(allow_hyphen_values = true)]
    pub operand: String,

    #[command(flatten)]
    pub rate: RateArgs,
}

/// Subtract a timecode or frame count from a timecode.
#[derive(Args, Debug)]
pub struct CmdSubtract {
    /// Left-hand timecode; its rate and drop-frame setting carry to the result.
    pub timecode: String,

    /// A frame count (`-12`, `48`) or another timecode at the same rate.
    #[arg(allow_hyphen_values = true)]
    pub operand: String,

    #[command(flatten)]
    pub rate: RateArgs,
}

/// Read an operand as a signed frame count, falling back to a timecode.
pub fn parse_operand(operand: &str, frame_rate: FrameRate) -> anyhow::Result<Offset> {
    if let Ok(frames) = operand.parse::<i64>() {
        return Ok(Offset::Frames(frames));
    }
    let tc = Timecode::from_timecode_str(operand, frame_rate, None)
        .with_context(|| format!("Operand {operand:?} is neither a frame count nor a timecode"))?;
    Ok(Offset::Timecode(tc))
}

fn left_operand(timecode: &str, rate: &RateArgs) -> anyhow::Result<Timecode> {
    Timecode::from_timecode_str(timecode, rate.fps, rate.requested_drop_frame())
        .with_context(|| format!("Cannot read timecode {timecode:?}"))
}

impl CmdAdd {
    /// Compute the sum.
    pub fn result(&self) -> anyhow::Result<Timecode> {
        let left = left_operand(&self.timecode, &self.rate)?;
        let offset = parse_operand(&self.operand, self.rate.fps)?;
        left.add(offset)
            .with_context(|| format!("Cannot add {} to {}", self.operand, left))
    }

    /// Execute the add command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let tc = self.result()?;
        emit(json, &TimecodeReport::from(&tc), &tc.to_string())
    }
}

impl CmdSubtract {
    /// Compute the difference.
    pub fn result(&self) -> anyhow::Result<Timecode> {
        let left = left_operand(&self.timecode, &self.rate)?;
        let offset = parse_operand(&self.operand, self.rate.fps)?;
        left.subtract(offset)
            .with_context(|| format!("Cannot subtract {} from {}", self.operand, left))
    }

    /// Execute the subtract command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let tc = self.result()?;
        emit(json, &TimecodeReport::from(&tc), &tc.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Command};
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn run(args: &[&str]) -> anyhow::Result<Timecode> {
        match Cli::try_parse_from(args).unwrap().command {
            Command::Add(cmd) => cmd.result(),
            Command::Subtract(cmd) => cmd.result(),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("24", FrameRate::FPS_24).unwrap(), Offset::Frames(24));
        assert_eq!(parse_operand("-3", FrameRate::FPS_24).unwrap(), Offset::Frames(-3));
        assert!(matches!(
            parse_operand("00:00:01:00", FrameRate::FPS_24).unwrap(),
            Offset::Timecode(tc) if tc.to_frame() == 24
        ));
        assert!(parse_operand("one second", FrameRate::FPS_24).is_err());
    }

    #[test]
    fn test_add_frames() {
        let tc = run(&["edtc", "add", "01:00:00:00", "24"]).unwrap();
        assert_eq!(tc.to_string(), "01:00:01:00");
    }

    #[test]
    fn test_add_negative_frames() {
        let tc = run(&["edtc", "add", "01:00:00:00", "-1"]).unwrap();
        assert_eq!(tc.to_string(), "00:59:59:23");
    }

    #[test]
    fn test_add_timecode_drop_frame() {
        let tc = run(&["edtc", "add", "--fps", "29.97", "00:00:59;29", "00:00:00;01"]).unwrap();
        assert_eq!(tc.to_string(), "00:01:00;02");
    }

    #[test]
    fn test_subtract_timecode() {
        let tc = run(&["edtc", "subtract", "00:00:02:00", "00:00:01:12"]).unwrap();
        assert_eq!(tc.to_string(), "00:00:00:12");
    }

    #[test]
    fn test_subtract_underflow() {
        assert!(run(&["edtc", "subtract", "00:00:00:00", "1"]).is_err());
    }
}
