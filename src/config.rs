//! Runtime configuration read from the environment (and `.env`)

use std::path::PathBuf;
use std::str::FromStr;

use crate::models::{ChartColor, DEFAULT_TIME_FORMAT};
use crate::services::chart_service::BindingStyle;
use crate::utils::ChartError;

const DEFAULT_OUTPUT_DIR: &str = "charts";
const DEFAULT_WIDTH: u32 = 1024;
const DEFAULT_HEIGHT: u32 = 576;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Summary data file used when no path is passed on the command line
    pub data_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub style: BindingStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_path: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            style: BindingStyle::default(),
        }
    }
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ChartError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names; unset or blank
    /// variables fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChartError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let color = match get("CHART_COLOR") {
            Some(name) => ChartColor::from_str(&name)?,
            None => defaults.style.color,
        };

        Ok(AppConfig {
            data_path: get("SUMMARY_DATA_PATH").map(PathBuf::from),
            output_dir: get("CHART_OUTPUT_DIR").map(PathBuf::from).unwrap_or(defaults.output_dir),
            width: parse_dimension("CHART_WIDTH", get("CHART_WIDTH"), defaults.width)?,
            height: parse_dimension("CHART_HEIGHT", get("CHART_HEIGHT"), defaults.height)?,
            style: BindingStyle {
                color,
                time_format: get("CHART_TIME_FORMAT").unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string()),
            },
        })
    }
}

fn parse_dimension(key: &str, value: Option<String>, default: u32) -> Result<u32, ChartError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.parse::<u32>() {
        Ok(0) | Err(_) => Err(ChartError::Config(format!(
            "{} must be a positive number of pixels, got '{}'",
            key, value
        ))),
        Ok(n) => Ok(n),
    }
}
