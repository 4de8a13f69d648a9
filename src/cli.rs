//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::term::MAX_CELL_SIZE;
use crate::types::{CaptureSimulation, MateScan};

#[derive(Debug, Default, Parser)]
#[command(name = "tui-chess", version, about = "Two-player chess on a terminal board")]
pub struct Cli {
    /// JSON config file (defaults to $TUI_CHESS_CONFIG when set)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Whether the check probe removes a captured piece: remove | keep
    #[arg(long, value_name = "MODE", value_parser = parse_capture_simulation)]
    pub capture_sim: Option<CaptureSimulation>,

    /// Pieces consulted for checkmate/stalemate: all | selected
    #[arg(long, value_name = "MODE", value_parser = parse_mate_scan)]
    pub mate_scan: Option<MateScan>,

    /// Terminal columns per board square (1-16)
    #[arg(long, value_name = "COLS", value_parser = cell_size_parser())]
    pub cell_width: Option<u16>,

    /// Terminal rows per board square (1-16)
    #[arg(long, value_name = "ROWS", value_parser = cell_size_parser())]
    pub cell_height: Option<u16>,

    /// Write logs to this file (logging is off without it)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn cell_size_parser() -> clap::builder::RangedI64ValueParser<u16> {
    clap::value_parser!(u16).range(1..=i64::from(MAX_CELL_SIZE))
}

fn parse_capture_simulation(s: &str) -> Result<CaptureSimulation, String> {
    CaptureSimulation::from_str(s).ok_or_else(|| format!("unknown capture mode '{s}' (expected remove or keep)"))
}

fn parse_mate_scan(s: &str) -> Result<MateScan, String> {
    MateScan::from_str(s).ok_or_else(|| format!("unknown mate scan '{s}' (expected all or selected)"))
}
