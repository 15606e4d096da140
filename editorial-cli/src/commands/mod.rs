//! CLI subcommand implementations.

pub mod arithmetic;
pub mod table;
pub mod to_frame;
pub mod to_timecode;

pub use arithmetic::{CmdAdd, CmdSubtract};
pub use table::CmdTable;
pub use to_frame::CmdToFrame;
pub use to_timecode::CmdToTimecode;

use clap::Args;
use editorial_timecode::{FrameRate, Timecode};
use serde::Serialize;

/// Frame rate and drop-frame options shared by the conversion commands.
#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    /// Frame rate: an integer (`24`), a decimal (`29.97`) or a ratio (`30000/1001`).
    #[arg(long, env = "EDTC_FPS", default_value = "24")]
    pub fps: FrameRate,

    /// Force drop-frame counting.
    #[arg(long, conflicts_with = "non_drop_frame")]
    pub drop_frame: bool,

    /// Require non-drop-frame counting.
    #[arg(long)]
    pub non_drop_frame: bool,
}

impl RateArgs {
    /// The explicit drop-frame request, if any.
    pub fn requested_drop_frame(&self) -> Option<bool> {
        match (self.drop_frame, self.non_drop_frame) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// A timecode with its frame number, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimecodeReport {
    /// Canonical label.
    pub timecode: String,
    /// Absolute frame number.
    pub frame: u64,
    /// Frame rate, display form.
    pub fps: String,
    /// Whether drop-frame counting is in effect.
    pub drop_frame: bool,
    /// Elapsed real time in seconds.
    pub seconds: f64,
}

impl From<&Timecode> for TimecodeReport {
    fn from(tc: &Timecode) -> Self {
        Self {
            timecode: tc.to_string(),
            frame: tc.to_frame(),
            fps: tc.frame_rate().to_string(),
            drop_frame: tc.drop_frame(),
            seconds: tc.to_seconds_f64(),
        }
    }
}

/// Print a report as JSON, or its plain text form.
pub fn emit(json: bool, report: &TimecodeReport, text: &str) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{text}");
    }
    Ok(())
}
