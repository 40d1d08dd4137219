pub fn execute() -> String {
    [
        "📊 summary-charts - daily transaction and sales charts",
        "",
        "Usage: summary-charts <command> [DATA_PATH]",
        "",
        "Commands:",
        "  config   (json)   Print both chart configurations as JSON",
        "  render   (png)    Draw both charts as PNG files into CHART_OUTPUT_DIR",
        "  preview  (table)  Print both series as text tables",
        "  help     (-h)     Show this message",
        "",
        "DATA_PATH is a JSON file with `chart_count` and `chart_gross` arrays of",
        "{\"x\": <date or epoch ms>, \"y\": <number>} records. Without it,",
        "SUMMARY_DATA_PATH is used.",
        "",
        "Environment: CHART_OUTPUT_DIR, CHART_WIDTH, CHART_HEIGHT, CHART_COLOR,",
        "CHART_TIME_FORMAT (moment style, default MM/DD/YYYY), RUST_LOG",
    ]
    .join("\n")
}
