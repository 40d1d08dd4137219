use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::models::SummaryChartData;
use crate::utils::ChartError;

/// Parse a summary data object from JSON text
pub fn parse_summary(json: &str) -> Result<SummaryChartData, ChartError> {
    let summary: SummaryChartData = serde_json::from_str(json)?;
    debug!(
        "Parsed summary data: {} count records, {} gross records",
        summary.chart_count.len(),
        summary.chart_gross.len()
    );
    Ok(summary)
}

/// Read a summary data object from a JSON file
pub fn load_summary(path: &Path) -> Result<SummaryChartData, ChartError> {
    info!("Loading summary data from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_summary(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_parse_both_series() {
        let summary = parse_summary(
            r#"{
                "chart_count": [{"x": "2024-01-01", "y": 4}, {"x": "2024-01-02", "y": 6}],
                "chart_gross": [{"x": 1704067200000, "y": 120.5}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            summary.chart_count,
            vec![Record::new("2024-01-01", 4.0), Record::new("2024-01-02", 6.0)]
        );
        assert_eq!(summary.chart_gross, vec![Record::new(1_704_067_200_000i64, 120.5)]);
    }

    #[test]
    fn test_missing_series_are_empty() {
        let summary = parse_summary(r#"{"chart_count": []}"#).unwrap();
        assert_eq!(summary, SummaryChartData::default());
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        let result = parse_summary(r#"{"chart_count": [{"x": "2024-01-01", "y": "four"}]}"#);
        assert!(matches!(result, Err(ChartError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "summary_charts_load_{}.json",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        fs::write(&path, r#"{"chart_gross": [{"x": "2024-01-05", "y": 10}]}"#).unwrap();

        let summary = load_summary(&path);
        let _ = fs::remove_file(&path);

        let summary = summary.unwrap();
        assert!(summary.chart_count.is_empty());
        assert_eq!(summary.chart_gross.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_summary(Path::new("/nonexistent/summary_charts/data.json"));
        assert!(matches!(result, Err(ChartError::Io(_))));
    }
}
