use thiserror::Error;

/// Errors raised around chart construction
///
/// Normalization itself never fails: an unparseable date becomes an invalid
/// `ChartDate` instead. These cover loading input, configuration and drawing.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unknown chart color: '{0}'. Supported: red, orange, yellow, green, blue, purple, grey")]
    UnknownColor(String),
    #[error("No plottable data in chart '{0}'")]
    EmptySeries(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Unknown command: '{0}'. Try `summary-charts help`")]
    UnknownCommand(String),
}
