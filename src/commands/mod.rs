pub mod chart_config;
pub mod help;
pub mod preview;
pub mod render;

use std::path::PathBuf;

use tracing::info;

use crate::config::AppConfig;
use crate::models::SummaryChartData;
use crate::services::summary_service;
use crate::utils::ChartError;

/// Run one command line and return the text to print
pub fn handle_args(config: &AppConfig, args: &[String]) -> Result<String, ChartError> {
    let parts: Vec<&str> = args.iter().map(String::as_str).collect();
    let Some((&command, rest)) = parts.split_first() else {
        return Ok(help::execute());
    };

    info!("▶ Running '{}' with args: {:?}", command, rest);

    match command.to_lowercase().as_str() {
        "config" | "json" => chart_config::execute(config, rest),
        "render" | "png" => render::execute(config, rest),
        "preview" | "table" => preview::execute(config, rest),
        "help" | "-h" | "--help" => Ok(help::execute()),
        _ => Err(ChartError::UnknownCommand(command.to_string())),
    }
}

/// Load the summary data named by the first argument, falling back to
/// `SUMMARY_DATA_PATH`
pub(crate) fn load_input(config: &AppConfig, args: &[&str]) -> Result<SummaryChartData, ChartError> {
    let path = match args.first() {
        Some(arg) => PathBuf::from(arg),
        None => config.data_path.clone().ok_or_else(|| {
            ChartError::Config(
                "No summary data file given. Pass a path or set SUMMARY_DATA_PATH".to_string(),
            )
        })?,
    };
    summary_service::load_summary(&path)
}
