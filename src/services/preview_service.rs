use crate::models::{ChartConfig, NormalizedRecord};
use crate::services::render_service::moment_to_strftime;
use crate::utils::Table;

/// Shown in place of a date that could not be parsed
pub const INVALID_DATE_TEXT: &str = "Invalid Date";

/// Render a normalized series as a titled text table
pub fn preview_series(title: &str, records: &[NormalizedRecord], time_format: &str) -> String {
    let pattern = moment_to_strftime(time_format);

    let mut table = Table::new(&["Date", "Value"]);
    for record in records {
        let date = match record.x.instant() {
            Some(dt) => dt.format(&pattern).to_string(),
            None => INVALID_DATE_TEXT.to_string(),
        };
        table.add_row(vec![date, record.y.to_string()]);
    }

    if table.is_empty() {
        return format!("{} (no records)", title);
    }
    format!("{} ({} records)\n{}", title, table.len(), table.render())
}

/// Preview every dataset of a chart
pub fn preview_chart(config: &ChartConfig) -> String {
    config
        .data
        .datasets
        .iter()
        .map(|dataset| {
            preview_series(
                &format!("{}: {}", config.title(), dataset.label),
                &dataset.data,
                config.time_format(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::services::chart_service::{count_chart, BindingStyle};
    use crate::services::normalize_service::normalize_series;

    #[test]
    fn test_preview_uses_display_format() {
        let records = normalize_series(&[Record::new("2024-01-15", 42.0), Record::new("soon", 7.5)]);
        let preview = preview_series("Counts", &records, "MM/DD/YYYY");
        let lines: Vec<&str> = preview.lines().collect();

        assert_eq!(lines[0], "Counts (2 records)");
        assert_eq!(lines[3], "01/15/2024   | 42");
        assert_eq!(lines[4], "Invalid Date | 7.5");
    }

    #[test]
    fn test_preview_empty_series() {
        assert_eq!(preview_series("Sales", &[], "MM/DD/YYYY"), "Sales (no records)");
    }

    #[test]
    fn test_preview_chart_titles_each_dataset() {
        let config = count_chart(&[Record::new("2024-01-01", 1.0)], &BindingStyle::default());
        let preview = preview_chart(&config);

        assert!(preview.starts_with("Transactions Per Day: Total (1 records)"));
        assert!(preview.contains("01/01/2024"));
    }
}
