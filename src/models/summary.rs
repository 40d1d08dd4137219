//! Summary page input

use serde::{Deserialize, Serialize};

use super::record::Record;

/// The two daily series the summary page charts
///
/// Produced by the sales database before charting; missing series load as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryChartData {
    /// Transactions per day
    #[serde(default)]
    pub chart_count: Vec<Record>,
    /// Gross sales per day
    #[serde(default)]
    pub chart_gross: Vec<Record>,
}
