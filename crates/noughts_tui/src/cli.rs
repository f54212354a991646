//! Command-line interface for noughts.

use clap::{Parser, ValueEnum};
use noughts_core::GameMode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Opponent for the first round
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed for the computer's random fallback move
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Game mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two players on one keyboard
    Pvp,
    /// Play X against the computer
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Pvc => GameMode::PlayerVsComputer,
        }
    }
}
