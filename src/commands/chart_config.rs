use crate::config::AppConfig;
use crate::services::chart_service;
use crate::utils::ChartError;

use super::load_input;

/// Print both chart configurations as JSON
pub fn execute(config: &AppConfig, args: &[&str]) -> Result<String, ChartError> {
    let summary = load_input(config, args)?;
    let charts = chart_service::summary_charts(&summary, &config.style);
    charts.to_json_pretty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::write_sample;

    #[test]
    fn test_prints_both_charts() {
        let path = write_sample("config_cmd");
        let output = execute(&AppConfig::default(), &[path.to_str().unwrap()]);
        let _ = std::fs::remove_file(&path);

        let value: serde_json::Value = serde_json::from_str(&output.unwrap()).unwrap();
        let sales = &value["summarySalesChart"]["data"]["datasets"][0]["data"];
        assert_eq!(sales[0]["x"], "2024-01-01T00:00:00.000Z");
        assert!(sales[1]["x"].is_null());
        assert_eq!(value["summaryCountChart"]["options"]["title"]["text"], "Transactions Per Day");
    }
}
