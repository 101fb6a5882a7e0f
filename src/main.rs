use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ephemeris::{take_census, GameMode, Ruleset, VarisatOracle};

/// Exhaustively enumerate every valid sky and report placement probabilities and entropies.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Which board to census.
    #[arg(long, value_enum, default_value = "standard")]
    mode: Mode,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// The 12-sector standard board.
    Standard,
    /// The 18-sector expert board.
    Expert,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Standard => GameMode::Standard,
            Mode::Expert => GameMode::Expert,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mode = GameMode::from(cli.mode);
    let ruleset = Ruleset::for_mode(mode);

    let mut oracle = VarisatOracle::new();
    let census = match take_census(&ruleset, &mut oracle) {
        Ok(census) => census,
        Err(err) => {
            eprintln!("census aborted: {err}");
            return ExitCode::FAILURE;
        }
    };

    match census.distribution() {
        Some(distribution) => {
            print!("{distribution}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("the {mode} rules admit no valid boards; statistics are undefined");
            ExitCode::SUCCESS
        }
    }
}
