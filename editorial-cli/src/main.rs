//! edtc - Command-line editorial timecode calculator.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CmdAdd, CmdSubtract, CmdTable, CmdToFrame, CmdToTimecode};

/// Command-line arguments for the timecode calculator.
#[derive(Parser, Debug)]
#[command(name = "edtc")]
#[command(version)]
#[command(about = "Convert between SMPTE timecodes and frame numbers")]
#[command(long_about = "edtc converts editorial timecodes to frame numbers and back,\n\
    including drop-frame counting at 23.976, 29.97, 47.952 and 59.94 fps.\n\n\
    EXAMPLES:\n    \
    edtc to-frame 01:00:00:00\n    \
    edtc to-frame --fps 29.97 00:01:00;02\n    \
    edtc to-timecode --fps 30000/1001 --drop-frame 1800\n    \
    edtc add 01:00:00:00 24\n    \
    edtc table --json")]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output with conversion details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a timecode to a frame number
    ToFrame(CmdToFrame),
    /// Convert a frame number to a timecode
    ToTimecode(CmdToTimecode),
    /// Add a frame count or timecode to a timecode
    Add(CmdAdd),
    /// Subtract a frame count or timecode from a timecode
    Subtract(CmdSubtract),
    /// List the drop-frame rates
    Table(CmdTable),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging (not in JSON mode)
    if !cli.json {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(if cli.verbose {
                tracing::Level::TRACE
            } else {
                tracing::Level::INFO
            })
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    match &cli.command {
        Command::ToFrame(cmd) => cmd.run(cli.json),
        Command::ToTimecode(cmd) => cmd.run(cli.json),
        Command::Add(cmd) => cmd.run(cli.json),
        Command::Subtract(cmd) => cmd.run(cli.json),
        Command::Table(cmd) => cmd.run(cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["edtc", "table", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Table(_)));
    }
}
