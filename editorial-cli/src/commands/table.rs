//! Drop-frame table listing command.

use clap::Args;
use editorial_timecode::{DropFrameSettings, DROP_FRAME_TABLE};
use serde::Serialize;

/// One row of the drop-frame table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Frame rate in frames per second.
    pub fps: f64,
    /// Labels dropped per minute.
    pub drop_frames: u32,
    /// Nominal integer rate.
    pub nominal: u32,
    /// Frames in ten minutes.
    pub frames_per_ten_minutes: u64,
}

impl From<&DropFrameSettings> for TableRow {
    fn from(settings: &DropFrameSettings) -> Self {
        Self {
            fps: f64::from(settings.millis) / 1000.0,
            drop_frames: settings.count,
            nominal: settings.fps_int,
            frames_per_ten_minutes: settings.fp10m,
        }
    }
}

/// List the frame rates that support drop-frame counting.
#[derive(Args, Debug)]
pub struct CmdTable {}

impl CmdTable {
    /// Table rows in ascending rate order.
    pub fn rows(&self) -> Vec<TableRow> {
        DROP_FRAME_TABLE.iter().map(TableRow::from).collect()
    }

    /// Execute the table command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let rows = self.rows();
        if json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        println!("{:<10} {:>6} {:>8} {:>10}", "fps", "drop", "nominal", "frames/10m");
        for row in rows {
            println!(
                "{:<10} {:>6} {:>8} {:>10}",
                row.fps, row.drop_frames, row.nominal, row.frames_per_ten_minutes
            );
        }
        Ok(())
    }
}
