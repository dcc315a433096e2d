use std::process::ExitCode;

use clap::Parser;

mod adjust_cmd;
mod cli;
mod error;
mod logging;
mod ops_cmd;
mod shared;
mod time_cmd;

use adjust_cmd::run_adjust;
use cli::{Cli, Commands};
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use ops_cmd::run_ops;
use time_cmd::{run_diff, run_round};

/// Resolve the output format, then run the command, rendering any error in
/// that format.
fn dispatch<A>(
    args: A,
    output_format: &str,
    run: fn(A, OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(args, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Adjust(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_adjust)
        }
        Commands::Diff(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_diff)
        }
        Commands::Round(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_round)
        }
        Commands::Ops(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_ops)
        }
    }
}
