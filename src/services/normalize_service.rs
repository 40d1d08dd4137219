use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::models::{ChartDate, NormalizedRecord, RawTimestamp, Record};

/// Largest magnitude of a JavaScript time value, in epoch milliseconds.
/// chrono's own range (`DateTime::<Utc>::MIN_UTC..=MAX_UTC`, roughly
/// -8.33e15..=8.21e15 ms) is narrower and is the bound that applies in
/// practice; values between the two are invalid dates as well.
const MAX_TIME_VALUE_MS: f64 = 8.64e15;

/// Date-times with an offset but no seconds, e.g. `2024-01-15T10:30Z`
const OFFSET_MINUTE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Offset-less date-times, read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Resolve a record's time value for a time-scaled axis
///
/// `y` passes through untouched. An `x` that cannot be read as a date turns
/// into `ChartDate::INVALID`; callers are expected to supply well-formed input.
pub fn normalize(record: &Record) -> NormalizedRecord {
    let x = parse_timestamp(&record.x);
    if !x.is_valid() {
        debug!("Record time {:?} is not a date, plotting it as an invalid date", record.x);
    }
    NormalizedRecord { x, y: record.y }
}

/// Normalize every record of a series, keeping order and length
pub fn normalize_series(series: &[Record]) -> Vec<NormalizedRecord> {
    series.iter().map(normalize).collect()
}

/// Resolve a raw time value to an instant, or the invalid date
pub fn parse_timestamp(raw: &RawTimestamp) -> ChartDate {
    let instant = match raw {
        RawTimestamp::Millis(ms) => from_epoch_millis(*ms),
        RawTimestamp::Text(text) => parse_date_text(text.trim()),
    };
    instant.map(ChartDate::new).unwrap_or(ChartDate::INVALID)
}

fn from_epoch_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > MAX_TIME_VALUE_MS {
        return None;
    }
    Utc.timestamp_millis_opt(ms.trunc() as i64).single()
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }

    if let Some(dt) = parse_expanded_year(text) {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = parse_offset_minutes(text) {
        return Some(dt);
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(Utc.from_utc_datetime(&naive));
    }

    if let Some(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_year_month(text))
        .or_else(|| parse_year(text))
    {
        return midnight_utc(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%m/%d/%Y")
        .ok()
        .and_then(midnight_utc)
}

/// `+YYYYYY-MM-DD...` / `-YYYYYY-MM-DD...`, the expanded-year ISO form
///
/// The remainder is parsed against leap year 2000, then shifted to the real
/// year so an offset that crosses New Year keeps its effect.
fn parse_expanded_year(text: &str) -> Option<DateTime<Utc>> {
    let sign = match text.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = text.get(1..7)?;
    let rest = text.get(7..)?;
    if !all_digits(digits) || !rest.starts_with('-') {
        return None;
    }

    let year = sign * digits.parse::<i32>().ok()?;
    let placeholder = parse_date_text(&format!("2000{}", rest))?;
    placeholder.with_year(placeholder.year() + (year - 2000))
}

fn parse_offset_minutes(text: &str) -> Option<DateTime<Utc>> {
    let text = match text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
        Some(head) => format!("{}+00:00", head),
        None => text.to_string(),
    };
    OFFSET_MINUTE_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&text, format).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// `YYYY-MM`, first of the month
fn parse_year_month(text: &str) -> Option<NaiveDate> {
    let (year, month) = text.split_once('-')?;
    if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// `YYYY`, first of January
fn parse_year(text: &str) -> Option<NaiveDate> {
    if text.len() != 4 || !all_digits(text) {
        return None;
    }
    NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1)
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive))
}
