use std::fmt::Display;
use std::process::ExitCode;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tadjust_core::{
    AdjustmentRecord, BatchReport, ContainerKind, Operation, OperationArgs, Temporal,
};
use tracing::debug;

use crate::cli::AdjustArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{DateInput, parse_container, parse_date_input, parse_weekday, read_lines};

pub fn run_adjust(args: AdjustArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let op: Operation = args.op.parse()?;
    let op_args = OperationArgs {
        weekday: args.weekday.as_deref().map(parse_weekday),
        n: args.n,
    };
    op.validate(&op_args)?;
    let container = args.container.as_deref().map(parse_container).transpose()?;

    let lines = if args.date.is_empty() {
        read_lines(&args.input)?
    } else {
        args.date
    };
    debug!(op = %op, inputs = lines.len(), ?container, "adjusting");

    match container {
        None => {
            for line in &lines {
                let input = parse_date_input(line)?;
                match input {
                    DateInput::Date(date) => adjust_one(op, &op_args, date, line, output_format)?,
                    DateInput::DateTime(datetime) => {
                        adjust_one(op, &op_args, datetime, line, output_format)?
                    }
                }
            }
        }
        Some(kind) => {
            let inputs = lines
                .iter()
                .map(|line| parse_date_input(line))
                .collect::<CliResult<Vec<_>>>()?;
            match homogeneous(inputs)? {
                Inputs::Dates(dates) => adjust_batch(op, &op_args, kind, dates, output_format)?,
                Inputs::DateTimes(datetimes) => {
                    adjust_batch(op, &op_args, kind, datetimes, output_format)?
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn adjust_one<T>(
    op: Operation,
    args: &OperationArgs,
    input: T,
    line: &str,
    output_format: OutputFormat,
) -> CliResult<()>
where
    T: Temporal + Serialize + Display,
{
    debug!(input = line, "processing line");
    let record = AdjustmentRecord::adjust(op, args, input)
        .map_err(|e| CliError::from(e).context(format_args!("Error processing '{}'", line)))?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&record)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{} -> {}", line, record.result);
        }
    }
    Ok(())
}

fn adjust_batch<T>(
    op: Operation,
    args: &OperationArgs,
    container: ContainerKind,
    inputs: Vec<T>,
    output_format: OutputFormat,
) -> CliResult<()>
where
    T: Temporal + Serialize + Display,
{
    let report = BatchReport::adjust(op, args, container, inputs)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for result in report.result.into_vec() {
                println!("{}", result);
            }
        }
    }
    Ok(())
}

enum Inputs {
    Dates(Vec<NaiveDate>),
    DateTimes(Vec<NaiveDateTime>),
}

/// A batch holds one kind of value; mixing dates and datetimes is an error.
fn homogeneous(inputs: Vec<DateInput>) -> CliResult<Inputs> {
    let Some(first) = inputs.first().copied() else {
        return Ok(Inputs::Dates(Vec::new()));
    };

    let mismatch = |input: &DateInput| {
        CliError::input(format!(
            "Mixed inputs: '{}' is a {} but the batch started with a {}",
            input,
            input.kind(),
            first.kind()
        ))
    };

    match first {
        DateInput::Date(_) => inputs
            .iter()
            .map(|input| match input {
                DateInput::Date(date) => Ok(*date),
                other => Err(mismatch(other)),
            })
            .collect::<CliResult<Vec<_>>>()
            .map(Inputs::Dates),
        DateInput::DateTime(_) => inputs
            .iter()
            .map(|input| match input {
                DateInput::DateTime(datetime) => Ok(*datetime),
                other => Err(mismatch(other)),
            })
            .collect::<CliResult<Vec<_>>>()
            .map(Inputs::DateTimes),
    }
}
