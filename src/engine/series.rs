//! Input record model and series preparation.
//!
//! The upstream feed delivers loosely shaped JSON records:
//! `{"type": "...", "scoreDateTime": "...", "score": 0.42}`. Only records
//! with type `wellbeing` participate in trend analysis; other types are
//! skipped. A record that violates the feed contract (missing or mistyped
//! field) fails the whole preparation rather than being silently dropped,
//! so bad upstream data never masquerades as a short history.

use serde_json::Value;

use crate::error::EngineError;

/// Record type that participates in trend analysis.
pub const WELLBEING_KIND: &str = "wellbeing";

/// One historical wellbeing measurement.
///
/// `timestamp` stays an ISO-8601 string: the feed emits uniform ISO-8601,
/// and for those lexicographic order is chronological order, so the engine
/// never needs to parse dates.
#[derive(Debug, Clone, PartialEq)]
pub struct WellbeingRecord {
    pub kind: String,
    pub timestamp: String,
    pub score: f64,
}

/// Filter and order the raw feed into a clean historical series.
///
/// Returns records of kind `wellbeing`, sorted ascending by timestamp.
/// Ties keep their relative input order (stable sort). An empty result is
/// valid: "no historical data" is a distinct downstream case, not an error.
pub fn prepare_series(records: &[Value]) -> Result<Vec<WellbeingRecord>, EngineError> {
    let mut series = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let kind = record
            .get("type")
            .and_then(Value::as_str)
            .ok_or(EngineError::MalformedRecord {
                index,
                field: "type",
            })?;

        if kind != WELLBEING_KIND {
            continue;
        }

        let timestamp = record.get("scoreDateTime").and_then(Value::as_str).ok_or(
            EngineError::MalformedRecord {
                index,
                field: "scoreDateTime",
            },
        )?;

        let score = record
            .get("score")
            .and_then(Value::as_f64)
            .ok_or(EngineError::MalformedRecord {
                index,
                field: "score",
            })?;

        series.push(WellbeingRecord {
            kind: kind.to_string(),
            timestamp: timestamp.to_string(),
            score,
        });
    }

    series.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    Ok(series)
}
