use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use tracing::{debug, info};

use crate::models::{ChartConfig, ChartKind, CssColor, NormalizedRecord};
use crate::utils::ChartError;

/// Moment-style tokens and their strftime equivalents, longest first
const FORMAT_TOKENS: [(&str, &str); 19] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("m", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("A", "%p"),
];

/// Convert a moment-style display format (`MM/DD/YYYY`) to strftime
///
/// Unknown characters are copied literally, as is text inside `[...]`.
pub fn moment_to_strftime(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut rest = format;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            let (literal, after) = match rest[1..].split_once(']') {
                Some((literal, after)) => (literal, after),
                None => (&rest[1..], ""),
            };
            out.push_str(&literal.replace('%', "%%"));
            rest = after;
            continue;
        }

        if let Some((token, strftime)) = FORMAT_TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            out.push_str(strftime);
            rest = &rest[token.len()..];
            continue;
        }

        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Valid points of a series, split where an invalid date leaves a gap
pub fn split_on_gaps(records: &[NormalizedRecord]) -> Vec<Vec<(DateTime<Utc>, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for record in records {
        match record.x.instant() {
            Some(x) if record.y.is_finite() => current.push((x, record.y)),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Span of the time axis; a single instant gets twelve hours either side
pub fn time_range(instants: &[DateTime<Utc>]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let min = *instants.iter().min()?;
    let max = *instants.iter().max()?;
    if min == max {
        Some(widen_range(min, max, Duration::hours(12)))
    } else {
        Some((min, max))
    }
}

/// Move both ends of a range outwards by `pad`, saturating at the limits of
/// representable time
pub fn widen_range(
    min: DateTime<Utc>,
    max: DateTime<Utc>,
    pad: Duration,
) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        min.checked_sub_signed(pad).unwrap_or(DateTime::<Utc>::MIN_UTC),
        max.checked_add_signed(pad).unwrap_or(DateTime::<Utc>::MAX_UTC),
    )
}

/// Span of the value axis: zero-based for non-negative data, padded 10%
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (0.0, 1.0);
    }

    let lower = finite.iter().copied().fold(f64::INFINITY, f64::min).min(0.0);
    let upper = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max).max(0.0);
    let padding = (upper - lower).max(1.0) * 0.1;

    let lower = if lower < 0.0 { lower - padding } else { 0.0 };
    (lower, upper + padding)
}

/// Bar width: 80% of the tightest spacing between points, 20 hours when
/// there is nothing to compare against
pub fn bar_width(instants: &[DateTime<Utc>]) -> Duration {
    let mut sorted = instants.to_vec();
    sorted.sort();
    sorted.dedup();

    sorted
        .windows(2)
        .map(|w| w[1] - w[0])
        .min()
        .map(|spacing| spacing * 4 / 5)
        .unwrap_or_else(|| Duration::hours(20))
}

fn to_plotters(color: &CssColor) -> RGBAColor {
    RGBColor(color.r, color.g, color.b).mix(color.opacity())
}

fn render_error<E: std::fmt::Display>(step: &'static str) -> impl Fn(E) -> ChartError {
    move |e| ChartError::Render(format!("Failed to {}: {}", step, e))
}

/// Draw a chart configuration to a PNG file
pub fn render_chart(
    config: &ChartConfig,
    output_path: &Path,
    width: u32,
    height: u32,
) -> Result<(), ChartError> {
    let points: Vec<(DateTime<Utc>, f64)> = config
        .data
        .datasets
        .iter()
        .flat_map(|dataset| split_on_gaps(&dataset.data))
        .flatten()
        .collect();
    let instants: Vec<DateTime<Utc>> = points.iter().map(|(x, _)| *x).collect();
    let values: Vec<f64> = points.iter().map(|(_, y)| *y).collect();

    let (x_min, x_max) = time_range(&instants)
        .ok_or_else(|| ChartError::EmptySeries(config.title().to_string()))?;
    let (y_min, y_max) = value_range(&values);

    let half_bar = bar_width(&instants) / 2;
    let has_bars = config
        .data
        .datasets
        .iter()
        .any(|dataset| dataset.kind.unwrap_or(config.kind) == ChartKind::Bar);
    let (x_min, x_max) = if has_bars {
        widen_range(x_min, x_max, half_bar)
    } else {
        (x_min, x_max)
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    debug!(
        "Rendering '{}' with {} points, x {} .. {}, y {} .. {}",
        config.title(),
        points.len(),
        x_min,
        x_max,
        y_min,
        y_max
    );

    {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error("fill canvas"))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(config.title(), ("sans-serif", 32.0).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(render_error("build chart"))?;

        let pattern = moment_to_strftime(config.time_format());
        let date_label = |dt: &DateTime<Utc>| dt.format(&pattern).to_string();
        let show_x_axis = config
            .options
            .scales
            .x_axes
            .first()
            .map(|axis| axis.display)
            .unwrap_or(true);

        let mut mesh = chart.configure_mesh();
        mesh.x_labels(8).x_label_formatter(&date_label);
        if !show_x_axis {
            mesh.disable_x_axis();
        }
        mesh.draw().map_err(render_error("draw mesh"))?;

        for dataset in &config.data.datasets {
            let fill = to_plotters(&dataset.background_color);
            let border = to_plotters(&dataset.border_color);

            match dataset.kind.unwrap_or(config.kind) {
                ChartKind::Line => {
                    // Invalid dates break the line instead of joining across them
                    for (i, segment) in split_on_gaps(&dataset.data).into_iter().enumerate() {
                        let series = chart
                            .draw_series(
                                AreaSeries::new(segment.clone(), 0.0, fill.filled())
                                    .border_style(border.stroke_width(2)),
                            )
                            .map_err(render_error("draw line"))?;
                        if i == 0 {
                            series.label(dataset.label.as_str()).legend(move |(x, y)| {
                                Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled())
                            });
                        }

                        chart
                            .draw_series(
                                segment
                                    .iter()
                                    .map(|&(x, y)| Circle::new((x, y), 3, border.filled())),
                            )
                            .map_err(render_error("draw points"))?;
                    }
                }
                ChartKind::Bar => {
                    let bars: Vec<(DateTime<Utc>, DateTime<Utc>, f64)> = split_on_gaps(&dataset.data)
                        .into_iter()
                        .flatten()
                        .map(|(x, y)| {
                            let (left, right) = widen_range(x, x, half_bar);
                            (left, right, y)
                        })
                        .collect();

                    chart
                        .draw_series(bars.iter().map(|&(left, right, y)| {
                            Rectangle::new([(left, 0.0), (right, y)], fill.filled())
                        }))
                        .map_err(render_error("draw bars"))?
                        .label(dataset.label.as_str())
                        .legend(move |(x, y)| {
                            Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled())
                        });

                    chart
                        .draw_series(bars.iter().map(|&(left, right, y)| {
                            Rectangle::new([(left, 0.0), (right, y)], border.stroke_width(1))
                        }))
                        .map_err(render_error("draw bar borders"))?;
                }
            }
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_error("draw legend"))?;

        root.present().map_err(render_error("write image"))?;
    }

    info!("📈 Wrote '{}' to {}", config.title(), output_path.display());
    Ok(())
}
