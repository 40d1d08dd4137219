//! Chart configuration models
//!
//! Plain data mirroring the configuration object a browser charting library
//! consumes. Nothing here knows how to draw; `render_service` does that.

use serde::{Deserialize, Serialize};

use super::palette::CssColor;
use super::record::NormalizedRecord;

/// Display format used when a chart does not name one
pub const DEFAULT_TIME_FORMAT: &str = "MM/DD/YYYY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// A complete chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn title(&self) -> &str {
        &self.options.title.text
    }

    /// Display format of the first horizontal axis
    pub fn time_format(&self) -> &str {
        self.options
            .scales
            .x_axes
            .first()
            .map(|axis| axis.time.format.as_str())
            .unwrap_or(DEFAULT_TIME_FORMAT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// Overrides the chart kind for this dataset
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
    pub background_color: CssColor,
    pub border_color: CssColor,
    pub data: Vec<NormalizedRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: ChartTitle,
    pub scales: Scales,
    pub elements: Elements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub x_axes: Vec<TimeAxis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Time,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub display: bool,
    pub time: TimeOptions,
}

impl TimeAxis {
    pub fn new(format: &str) -> Self {
        TimeAxis {
            kind: AxisKind::Time,
            display: true,
            time: TimeOptions { format: format.to_string() },
        }
    }
}

/// Moment-style display format, e.g. `MM/DD/YYYY`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOptions {
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elements {
    pub line: LineElement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineElement {
    /// 0 draws straight segments between points
    pub tension: f64,
}
