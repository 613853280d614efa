mod config;
mod core;
mod embed;
mod error;
mod grid;
mod renderer;
mod shared;
mod utils;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::core::launcher;
use crate::shared::constants;
use crate::utils::logger;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to griddiff.config when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// input_file1 input_file2 output_file
    files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare input1 against the reference input2 and write a difference image
    Compare {
        input1: PathBuf,
        input2: PathBuf,
        output: PathBuf,
        /// Also write the per-class cell counts as JSON
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
    /// Render a single grid
    Render { input: PathBuf, output: PathBuf },
    /// Write a binary file (e.g. a linker script) as a C char array
    Embed {
        input: PathBuf,
        output: PathBuf,
        /// Array name (defaults to LINKER_SCRIPT)
        #[arg(short, long)]
        symbol: Option<String>,
    },
}

fn print_usage() {
    for line in constants::USAGE_LINES {
        eprintln!("{}", line);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    logger::init(&config.error_log, &config.debug_log);
    logger::info(&format!("{} v{} starting", constants::APP_NAME, env!("CARGO_PKG_VERSION")));
    for key in &config.unknown_keys {
        logger::debug(&format!("ignoring unknown config key `{}`", key));
    }

    match cli.command {
        Some(Commands::Compare {
            input1,
            input2,
            output,
            report,
        }) => {
            let report = report.or_else(|| config.report.clone());
            launcher::run_compare(&input1, &input2, &output, report.as_deref())?;
        }
        Some(Commands::Render { input, output }) => {
            launcher::run_render(&input, &output)?;
        }
        Some(Commands::Embed {
            input,
            output,
            symbol,
        }) => {
            let symbol = symbol.unwrap_or_else(|| config.symbol.clone());
            launcher::run_embed(&input, &output, &symbol)?;
        }
        None => {
            let [input1, input2, output] = cli.files.as_slice() else {
                anyhow::bail!("expected exactly 3 arguments, got {}", cli.files.len());
            };
            launcher::run_compare(input1, input2, output, config.report.as_deref())?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                print!("{}", err);
                return ExitCode::SUCCESS;
            }
            eprint!("{}", err);
            print_usage();
            return ExitCode::from(1);
        }
    };

    if cli.command.is_none() && cli.files.len() != 3 {
        print_usage();
        return ExitCode::from(1);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::error(&format!("{:#}", err));
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
