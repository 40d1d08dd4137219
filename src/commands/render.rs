use tracing::warn;

use crate::config::AppConfig;
use crate::services::{chart_service, render_service};
use crate::utils::ChartError;

use super::load_input;

pub const COUNT_CHART_FILE: &str = "summary_count_chart.png";
pub const SALES_CHART_FILE: &str = "summary_sales_chart.png";

/// Draw both charts into the output directory
///
/// A chart with nothing to plot is skipped with a warning; the command only
/// fails when neither chart could be drawn.
pub fn execute(config: &AppConfig, args: &[&str]) -> Result<String, ChartError> {
    let summary = load_input(config, args)?;
    let charts = chart_service::summary_charts(&summary, &config.style);

    let mut written = Vec::new();
    let mut last_skip = None;
    for (chart, file) in [(&charts.count, COUNT_CHART_FILE), (&charts.sales, SALES_CHART_FILE)] {
        let path = config.output_dir.join(file);
        match render_service::render_chart(chart, &path, config.width, config.height) {
            Ok(()) => written.push(path.display().to_string()),
            Err(ChartError::EmptySeries(title)) => {
                warn!("Skipping '{}': no dated records to plot", title);
                last_skip = Some(ChartError::EmptySeries(title));
            }
            Err(e) => return Err(e),
        }
    }

    match (written.is_empty(), last_skip) {
        (true, Some(skip)) => Err(skip),
        _ => Ok(format!("✅ Wrote {}", written.join(", "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_nothing_plottable_fails() {
        let path = std::env::temp_dir().join(format!("summary_charts_render_empty_{}.json", std::process::id()));
        fs::write(&path, r#"{"chart_count": [{"x": "never", "y": 1}]}"#).unwrap();
        let config = AppConfig {
            output_dir: std::env::temp_dir().join("summary_charts_render_empty_out"),
            ..AppConfig::default()
        };

        let result = execute(&config, &[path.to_str().unwrap()]);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ChartError::EmptySeries(_))));
        assert!(!config.output_dir.join(COUNT_CHART_FILE).exists());
    }
}
