//! Frame number to timecode conversion command.

use super::{emit, RateArgs, TimecodeReport};
use anyhow::Context;
use clap::Args;
use editorial_timecode::Timecode;

/// Convert a frame number to a timecode.
#[derive(Args, Debug)]
pub struct CmdToTimecode {
    /// Non-negative frame number.
    pub frame: String,

    #[command(flatten)]
    pub rate: RateArgs,
}

impl CmdToTimecode {
    /// Build the timecode for the frame number. Unset drop-frame means non-drop.
    pub fn timecode(&self) -> anyhow::Result<Timecode> {
        Timecode::from_frame_number(&self.frame, self.rate.fps, self.rate.requested_drop_frame())
            .with_context(|| format!("Cannot convert frame number {:?}", self.frame))
    }

    /// Execute the to-timecode command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let tc = self.timecode()?;
        emit(json, &TimecodeReport::from(&tc), &tc.to_string())
    }
}
