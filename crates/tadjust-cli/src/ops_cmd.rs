use std::process::ExitCode;

use tadjust_core::{Operation, OperationInfo};

use crate::cli::OpsArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};

pub fn run_ops(_args: OpsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let infos: Vec<OperationInfo> = Operation::ALL.iter().copied().map(OperationInfo::from).collect();

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&infos)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for info in &infos {
                let params = info
                    .params
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{:<24} {:<12} {}", info.name, params, info.description);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
