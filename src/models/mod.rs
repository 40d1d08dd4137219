//! Data models for summary charts
//!
//! Input records, the summary data object, colors, and the serializable chart
//! configuration handed to a charting library.

pub mod chart;
pub mod palette;
pub mod record;
pub mod summary;

// Re-export commonly used types for convenience
pub use chart::{ChartConfig, ChartKind, DEFAULT_TIME_FORMAT};
pub use palette::{ChartColor, CssColor};
pub use record::{ChartDate, NormalizedRecord, RawTimestamp, Record};
pub use summary::SummaryChartData;
