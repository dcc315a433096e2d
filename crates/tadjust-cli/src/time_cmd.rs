use std::fmt::Display;
use std::process::ExitCode;

use serde::Serialize;
use tadjust_core::{RoundReport, TimeDifferenceReport};
use tracing::debug;

use crate::cli::{DiffArgs, RoundArgs};
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{ClockInput, parse_clock_input, parse_duration_config, parse_time};

pub fn run_diff(args: DiffArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let from = parse_time(&args.from)?;
    let to = parse_time(&args.to)?;
    let config = parse_duration_config(args.days_in_month, args.days_in_year)?;
    debug!(%from, %to, ?config, "time difference");

    let report = TimeDifferenceReport::new(from, to, config);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{} -> {}: {}", report.from, report.to, report.display);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn run_round(args: RoundArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let input = parse_clock_input(&args.time)?;
    debug!(?input, to = args.to, "rounding");

    match input {
        ClockInput::Time(time) => emit_round(RoundReport::new(time, args.to)?, output_format)?,
        ClockInput::DateTime(datetime) => {
            emit_round(RoundReport::new(datetime, args.to)?, output_format)?
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn emit_round<T: Serialize + Display>(
    report: RoundReport<T>,
    output_format: OutputFormat,
) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{} -> {}", report.input, report.result);
        }
    }
    Ok(())
}
