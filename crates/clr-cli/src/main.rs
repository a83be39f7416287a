//! clr2json: convert color palette files to JSON.

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use clr_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Mode};
use crate::commands::{run_batch, run_list_formats, run_single};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.exit()
        }
        Err(error) => {
            let _ = error.print();
            return ExitCode::FAILURE;
        }
    };
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    let result = match cli.mode() {
        Mode::ListFormats => run_list_formats(),
        Mode::Batch { colors_dir, output } => run_batch(colors_dir, output).map(|s| print_summary(&s)),
        Mode::Single { input, output } => run_single(input, output).map(|s| print_summary(&s)),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
