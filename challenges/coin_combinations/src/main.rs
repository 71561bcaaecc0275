use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use coin_combinations::dynamic_programming::coin_combinations_2;
use coin_combinations::{InputError, Scanner, Writer, testing};
use log::{error, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "coin_combinations")]
#[command(about = "CSES Coin Combinations II, counted modulo 10^9 + 7", long_about = None)]
struct Cli {
    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer every test case of an input (the default)
    Solve {
        /// Input file, stdin when omitted
        file: Option<PathBuf>,
    },
    /// Run N.in / N.out case files and compare the output
    Verify {
        #[arg(default_value = "data/coin_combinations_2")]
        dir: PathBuf,
    },
}

fn solve(file: Option<PathBuf>) -> Result<(), InputError> {
    let mut scanner = match file {
        Some(path) => {
            info!("reading {}", path.display());
            Scanner::new(BufReader::new(File::open(path)?))
        }
        None => Scanner::new(io::stdin().lock()),
    };
    let mut out = Writer::new();

    // answers produced before a malformed case are still printed
    let result = coin_combinations_2::solve(&mut scanner, &mut out);
    out.write_to(&mut io::stdout().lock())?;
    result
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Solve { file: None }) {
        Commands::Solve { file } => match solve(file) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Verify { dir } => {
            let report = testing::run_all_tests(&dir, coin_combinations_2::solve);
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
