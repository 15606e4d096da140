//! Timecode to frame number conversion command.

use super::{emit, RateArgs, TimecodeReport};
use anyhow::Context;
use clap::Args;
use editorial_timecode::Timecode;

/// Convert a timecode to its frame number.
#[derive(Args, Debug)]
pub struct CmdToFrame {
    /// Timecode such as `01:00:00:00` or `00:01:00;02`.
    pub timecode: String,

    #[command(flatten)]
    pub rate: RateArgs,
}

impl CmdToFrame {
    /// Parse the timecode at the requested rate.
    pub fn timecode(&self) -> anyhow::Result<Timecode> {
        Timecode::from_timecode_str(&self.timecode, self.rate.fps, self.rate.requested_drop_frame())
            .with_context(|| format!("Cannot convert timecode {:?}", self.timecode))
    }

    /// Execute the to-frame command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let tc = self.timecode()?;
        tracing::debug!(timecode = %tc, fps = %tc.frame_rate(), drop_frame = tc.drop_frame(), "parsed");
        emit(json, &TimecodeReport::from(&tc), &tc.to_frame().to_string())
    }
}
