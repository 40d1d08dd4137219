use serde::Serialize;
use tracing::debug;

use crate::models::chart::{
    ChartData, ChartOptions, ChartTitle, Dataset, Elements, LineElement, Scales, TimeAxis,
};
use crate::models::{ChartColor, ChartConfig, ChartKind, Record, SummaryChartData, DEFAULT_TIME_FORMAT};
use crate::services::normalize_service;
use crate::utils::ChartError;

/// Alpha of dataset fills
pub const FILL_ALPHA: f64 = 0.5;

/// Look shared by both summary charts
#[derive(Debug, Clone, PartialEq)]
pub struct BindingStyle {
    pub color: ChartColor,
    /// Moment-style axis format, e.g. `MM/DD/YYYY`
    pub time_format: String,
}

impl Default for BindingStyle {
    fn default() -> Self {
        BindingStyle {
            color: ChartColor::Green,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

/// What distinguishes one chart binding from another
#[derive(Debug, Clone, Copy)]
pub struct ChartBinding {
    pub title: &'static str,
    pub label: &'static str,
    pub chart_kind: ChartKind,
    pub dataset_kind: ChartKind,
}

/// Transactions per day, drawn as a line over a bar chart
pub const COUNT_BINDING: ChartBinding = ChartBinding {
    title: "Transactions Per Day",
    label: "Total",
    chart_kind: ChartKind::Bar,
    dataset_kind: ChartKind::Line,
};

/// Gross sales per day, drawn as bars
pub const SALES_BINDING: ChartBinding = ChartBinding {
    title: "Gross Sales per Day",
    label: "Daily Profits ($)",
    chart_kind: ChartKind::Bar,
    dataset_kind: ChartKind::Bar,
};

/// Build the configuration of one chart from a raw series
pub fn bind(binding: &ChartBinding, series: &[Record], style: &BindingStyle) -> ChartConfig {
    let data = normalize_service::normalize_series(series);
    debug!(
        "Binding {} records into '{}' ({} with invalid dates)",
        data.len(),
        binding.title,
        data.iter().filter(|r| !r.x.is_valid()).count()
    );

    ChartConfig {
        kind: binding.chart_kind,
        data: ChartData {
            datasets: vec![Dataset {
                label: binding.label.to_string(),
                kind: Some(binding.dataset_kind),
                background_color: style.color.with_alpha(FILL_ALPHA),
                border_color: style.color.solid(),
                data,
            }],
        },
        options: ChartOptions {
            title: ChartTitle { text: binding.title.to_string() },
            scales: Scales { x_axes: vec![TimeAxis::new(&style.time_format)] },
            elements: Elements { line: LineElement { tension: 0.0 } },
        },
    }
}

pub fn count_chart(series: &[Record], style: &BindingStyle) -> ChartConfig {
    bind(&COUNT_BINDING, series, style)
}

pub fn sales_chart(series: &[Record], style: &BindingStyle) -> ChartConfig {
    bind(&SALES_BINDING, series, style)
}

/// Both charts of the summary page, keyed by their canvas ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCharts {
    #[serde(rename = "summaryCountChart")]
    pub count: ChartConfig,
    #[serde(rename = "summarySalesChart")]
    pub sales: ChartConfig,
}

impl SummaryCharts {
    pub fn to_json_pretty(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn summary_charts(summary: &SummaryChartData, style: &BindingStyle) -> SummaryCharts {
    SummaryCharts {
        count: count_chart(&summary.chart_count, style),
        sales: sales_chart(&summary.chart_gross, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn days() -> Vec<Record> {
        vec![
            Record::new("2024-01-01", 1.0),
            Record::new("2024-01-02", 2.0),
            Record::new("2024-01-03", 3.0),
        ]
    }

    #[test]
    fn test_count_chart_matches_page_config() {
        let config = count_chart(&days()[..1], &BindingStyle::default());

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "type": "bar",
                "data": { "datasets": [{
                    "label": "Total",
                    "type": "line",
                    "backgroundColor": "rgba(75, 192, 192, 0.5)",
                    "borderColor": "rgb(75, 192, 192)",
                    "data": [{ "x": "2024-01-01T00:00:00.000Z", "y": 1.0 }]
                }]},
                "options": {
                    "title": { "text": "Transactions Per Day" },
                    "scales": { "xAxes": [{
                        "type": "time",
                        "display": true,
                        "time": { "format": "MM/DD/YYYY" }
                    }]},
                    "elements": { "line": { "tension": 0.0 } }
                }
            })
        );
    }

    #[test]
    fn test_sales_chart_is_bars() {
        let config = sales_chart(&days(), &BindingStyle::default());
        let dataset = &config.data.datasets[0];

        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(dataset.kind, Some(ChartKind::Bar));
        assert_eq!(dataset.label, "Daily Profits ($)");
        assert_eq!(config.title(), "Gross Sales per Day");
        assert_eq!(dataset.data.len(), 3);
    }

    #[test]
    fn test_style_overrides_color_and_format() {
        let style = BindingStyle {
            color: ChartColor::Purple,
            time_format: "YYYY-MM-DD".to_string(),
        };
        let config = count_chart(&days(), &style);

        assert_eq!(config.time_format(), "YYYY-MM-DD");
        assert_eq!(config.data.datasets[0].border_color.to_string(), "rgb(153, 102, 255)");
        assert_eq!(
            config.data.datasets[0].background_color.to_string(),
            "rgba(153, 102, 255, 0.5)"
        );
    }

    #[test]
    fn test_invalid_dates_reach_the_config_as_null() {
        let config = sales_chart(&[Record::new("whenever", 12.5)], &BindingStyle::default());
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["data"]["datasets"][0]["data"], json!([{ "x": null, "y": 12.5 }]));
    }

    #[test]
    fn test_summary_charts_keyed_by_canvas_id() {
        let summary = SummaryChartData {
            chart_count: days(),
            chart_gross: vec![Record::new("2024-01-01", 100.5)],
        };
        let charts = summary_charts(&summary, &BindingStyle::default());
        let value: serde_json::Value = serde_json::from_str(&charts.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["summaryCountChart"]["data"]["datasets"][0]["data"].as_array().unwrap().len(), 3);
        assert_eq!(value["summarySalesChart"]["data"]["datasets"][0]["data"][0]["y"], json!(100.5));
    }

    #[test]
    fn test_config_reads_back() {
        let config = count_chart(&days(), &BindingStyle::default());
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ChartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
