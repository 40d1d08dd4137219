//! Series record models

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::services::normalize_service;

/// Time value of a record as the data source delivered it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Milliseconds since the Unix epoch
    Millis(f64),
    /// Date text, e.g. `2024-01-15` or `2024-01-15 09:30:00`
    Text(String),
}

impl From<DateTime<Utc>> for RawTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        RawTimestamp::Millis(dt.timestamp_millis() as f64)
    }
}

impl From<i64> for RawTimestamp {
    fn from(millis: i64) -> Self {
        RawTimestamp::Millis(millis as f64)
    }
}

impl From<&str> for RawTimestamp {
    fn from(text: &str) -> Self {
        RawTimestamp::Text(text.to_string())
    }
}

/// One observation of a series before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub x: RawTimestamp,
    pub y: f64,
}

impl Record {
    pub fn new(x: impl Into<RawTimestamp>, y: f64) -> Self {
        Record { x: x.into(), y }
    }
}

/// An absolute instant on a time axis, or the invalid date
///
/// Serializes the way a JavaScript `Date` does: an RFC 3339 string with
/// millisecond precision, or `null` when invalid. Years outside 0..=9999 use
/// the expanded six-digit signed form, e.g. `+010000-01-01T00:00:00.000Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartDate(Option<DateTime<Utc>>);

impl ChartDate {
    pub const INVALID: ChartDate = ChartDate(None);

    pub fn new(instant: DateTime<Utc>) -> Self {
        ChartDate(Some(instant))
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }
}

impl From<DateTime<Utc>> for ChartDate {
    fn from(instant: DateTime<Utc>) -> Self {
        ChartDate::new(instant)
    }
}

impl Serialize for ChartDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(dt) => serializer.serialize_str(&to_iso_string(dt)),
            None => serializer.serialize_none(),
        }
    }
}

fn to_iso_string(dt: DateTime<Utc>) -> String {
    let year = dt.year();
    if (0..=9999).contains(&year) {
        return dt.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{}{:06}{}",
        sign,
        year.unsigned_abs(),
        dt.format("-%m-%dT%H:%M:%S%.3fZ")
    )
}

impl<'de> Deserialize<'de> for ChartDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
        Ok(match raw {
            Some(raw) => normalize_service::parse_timestamp(&raw),
            None => ChartDate::INVALID,
        })
    }
}

/// A record with its time value resolved for a time-scaled axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub x: ChartDate,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_accepts_text_and_millis() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[{"x": "2024-01-15", "y": 42}, {"x": 1705276800000, "y": 7.5}]"#,
        )
        .unwrap();

        assert_eq!(records[0], Record::new("2024-01-15", 42.0));
        assert_eq!(records[1], Record::new(1_705_276_800_000i64, 7.5));
    }

    #[test]
    fn test_chart_date_serializes_like_js_date() {
        let valid = NormalizedRecord {
            x: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap().into(),
            y: 42.0,
        };
        let invalid = NormalizedRecord { x: ChartDate::INVALID, y: 1.0 };

        assert_eq!(
            serde_json::to_string(&valid).unwrap(),
            r#"{"x":"2024-01-15T00:00:00.000Z","y":42.0}"#
        );
        assert_eq!(serde_json::to_string(&invalid).unwrap(), r#"{"x":null,"y":1.0}"#);
    }

    #[test]
    fn test_chart_date_reads_back() {
        let date = ChartDate::new(Utc.with_ymd_and_hms(2024, 3, 9, 18, 45, 12).unwrap());
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(serde_json::from_str::<ChartDate>(&json).unwrap(), date);
        assert_eq!(serde_json::from_str::<ChartDate>("null").unwrap(), ChartDate::INVALID);
    }

    #[test]
    fn test_far_years_use_expanded_form() {
        let late = ChartDate::new(Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap());
        let json = serde_json::to_string(&late).unwrap();
        assert_eq!(json, r#""+010000-01-01T00:00:00.000Z""#);
        assert_eq!(serde_json::from_str::<ChartDate>(&json).unwrap(), late);

        let early = ChartDate::new(Utc.with_ymd_and_hms(-271, 7, 4, 12, 0, 0).unwrap());
        let json = serde_json::to_string(&early).unwrap();
        assert_eq!(json, r#""-000271-07-04T12:00:00.000Z""#);
        assert_eq!(serde_json::from_str::<ChartDate>(&json).unwrap(), early);
    }

    #[test]
    fn test_limits_of_time_read_back() {
        for limit in [DateTime::<Utc>::MAX_UTC, DateTime::<Utc>::MIN_UTC] {
            let date = normalize_service::parse_timestamp(&RawTimestamp::from(limit));
            assert!(date.is_valid());
            let json = serde_json::to_string(&date).unwrap();
            assert_eq!(serde_json::from_str::<ChartDate>(&json).unwrap(), date, "reading {}", json);
        }
    }
}
