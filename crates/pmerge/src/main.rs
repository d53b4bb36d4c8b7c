mod report;

use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use merge_insertion::{ALL_STRATEGIES, ContainerStrategy, InputError, parse_values, run_timed};
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::report::{DISPLAY_CONFIG, write_reports};

#[derive(Parser, Debug)]
#[command(
    name = "pmerge",
    about = "Sort non-negative integers with Ford-Johnson merge-insertion and time each container",
    version
)]
struct Cli {
    /// Container strategy to run
    #[arg(long, value_enum, default_value_t = StrategyArg::All)]
    strategy: StrategyArg,

    /// Also print the comparison count and the information-theoretic bound
    #[arg(long)]
    comparisons: bool,

    /// Print every value instead of truncating long sequences
    #[arg(long)]
    full: bool,

    /// Values to sort (digits only)
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    values: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Vec,
    Deque,
    All,
}

impl StrategyArg {
    fn strategies(self) -> &'static [ContainerStrategy] {
        match self {
            Self::Vec => &ALL_STRATEGIES[..1],
            Self::Deque => &ALL_STRATEGIES[1..],
            Self::All => &ALL_STRATEGIES,
        }
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Input(err)) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let values = parse_values(&cli.values)?;
    debug!(len = values.len(), strategy = ?cli.strategy, "input validated");

    let reports: Vec<_> = cli
        .strategy
        .strategies()
        .iter()
        .map(|&strategy| run_timed(strategy, &values))
        .collect();

    let mut config = DISPLAY_CONFIG;
    config.show_comparisons = cli.comparisons;
    if cli.full {
        config = config.untruncated();
    }

    let mut out = io::stdout().lock();
    write_reports(&mut out, &values, &reports, &config)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
