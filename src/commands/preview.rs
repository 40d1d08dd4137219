use crate::config::AppConfig;
use crate::services::{chart_service, preview_service};
use crate::utils::ChartError;

use super::load_input;

/// Print both normalized series as text tables
pub fn execute(config: &AppConfig, args: &[&str]) -> Result<String, ChartError> {
    let summary = load_input(config, args)?;
    let charts = chart_service::summary_charts(&summary, &config.style);

    Ok(format!(
        "{}\n\n{}",
        preview_service::preview_chart(&charts.count),
        preview_service::preview_chart(&charts.sales)
    ))
}
