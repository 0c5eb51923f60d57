//! Trend classification and communication-tone selection.
//!
//! The baseline is the arithmetic mean of the FULL historical series, not a
//! rolling window and not all-but-last. A delta of more than ±0.05 against
//! that baseline is significant; exactly ±0.05 is stable.

use serde::{Serialize, Serializer};
use strum::Display;

use super::series::WellbeingRecord;

/// Delta against the historical mean that counts as a significant change.
/// Exact boundary values (±0.05) classify as stable.
pub const SIGNIFICANT_CHANGE: f64 = 0.05;

/// Qualitative direction of change between the current score and the
/// historical baseline. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TrendLabel {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

/// Recommended communication register for presenting guidance.
///
/// Fixed values from the 3×3 band/trend table, which collapses in the top
/// band because it does not distinguish declining from stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Tone {
    #[strum(serialize = "enthusiastic and encouraging")]
    EnthusiasticEncouraging,
    #[strum(serialize = "positive and supportive")]
    PositiveSupportive,
    #[strum(serialize = "optimistic and motivating")]
    OptimisticMotivating,
    #[strum(serialize = "gentle and guiding")]
    GentleGuiding,
    #[strum(serialize = "balanced and constructive")]
    BalancedConstructive,
    #[strum(serialize = "encouraging and supportive")]
    EncouragingSupportive,
    #[strum(serialize = "empathetic and caring")]
    EmpatheticCaring,
    #[strum(serialize = "understanding and helpful")]
    UnderstandingHelpful,
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Trend over the historical series, with a human-readable description.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendAnalysis {
    pub historical_average: Option<f64>,
    pub label: TrendLabel,
    pub description: String,
}

/// One row of the tone table: a score-band floor and the tone per trend
/// column. Declarative data so the boundary values stay auditable.
struct ToneRow {
    floor: f64,
    improving: Tone,
    declining: Tone,
    stable: Tone,
}

static TONE_TABLE: [ToneRow; 3] = [
    ToneRow {
        floor: 0.8,
        improving: Tone::EnthusiasticEncouraging,
        declining: Tone::PositiveSupportive,
        stable: Tone::PositiveSupportive,
    },
    ToneRow {
        floor: 0.6,
        improving: Tone::OptimisticMotivating,
        declining: Tone::GentleGuiding,
        stable: Tone::BalancedConstructive,
    },
    ToneRow {
        floor: 0.0,
        improving: Tone::EncouragingSupportive,
        declining: Tone::EmpatheticCaring,
        stable: Tone::UnderstandingHelpful,
    },
];

/// Classify the current score against the historical series.
///
/// Expects a score already validated into `[0, 1]` by report assembly.
pub fn classify_trend(current_score: f64, series: &[WellbeingRecord]) -> TrendAnalysis {
    if series.is_empty() {
        return TrendAnalysis {
            historical_average: None,
            label: TrendLabel::InsufficientData,
            description: format!(
                "Current wellbeing at {current_score:.2}, \
                 insufficient historical data for trend analysis"
            ),
        };
    }

    let average = series.iter().map(|r| r.score).sum::<f64>() / series.len() as f64;
    let delta = current_score - average;

    let label = if delta > SIGNIFICANT_CHANGE {
        TrendLabel::Improving
    } else if delta < -SIGNIFICANT_CHANGE {
        TrendLabel::Declining
    } else {
        TrendLabel::Stable
    };

    TrendAnalysis {
        historical_average: Some(average),
        label,
        description: format!(
            "Score is {label} from historical average of {average:.2} \
             to current wellbeing at {current_score:.2}"
        ),
    }
}

/// Look up the tone for a score band and trend.
///
/// `InsufficientData` resolves through the stable column: the table has no
/// dedicated column for it, so tone depends only on the score band when no
/// trend can be computed.
pub fn recommended_tone(current_score: f64, trend: TrendLabel) -> Tone {
    let row = TONE_TABLE
        .iter()
        .find(|row| current_score >= row.floor)
        .unwrap_or(&TONE_TABLE[TONE_TABLE.len() - 1]);

    match trend {
        TrendLabel::Improving => row.improving,
        TrendLabel::Declining => row.declining,
        TrendLabel::Stable | TrendLabel::InsufficientData => row.stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str, score: f64) -> WellbeingRecord {
        WellbeingRecord {
            kind: "wellbeing".to_string(),
            timestamp: timestamp.to_string(),
            score,
        }
    }

    #[test]
    fn empty_series_is_insufficient_data() {
        let analysis = classify_trend(0.5, &[]);
        assert_eq!(analysis.historical_average, None);
        assert_eq!(analysis.label, TrendLabel::InsufficientData);
        assert!(analysis.description.contains("insufficient historical data"));
        assert!(analysis.description.contains("0.50"));
    }

    #[test]
    fn baseline_is_the_mean_of_all_historical_scores() {
        let series = vec![record("2025-01-01", 0.5), record("2025-01-02", 0.7)];

        // mean 0.6; delta 0.06 > 0.05
        let analysis = classify_trend(0.66, &series);
        assert_eq!(analysis.label, TrendLabel::Improving);
        assert!(analysis.description.contains("0.60"));

        // delta 0.04 is within the threshold
        let analysis = classify_trend(0.64, &series);
        assert_eq!(analysis.label, TrendLabel::Stable);
    }

    #[test]
    fn exact_threshold_is_stable() {
        let series = vec![record("2025-01-01", 0.5)];
        assert_eq!(classify_trend(0.55, &series).label, TrendLabel::Stable);
        assert_eq!(classify_trend(0.45, &series).label, TrendLabel::Stable);
    }

    #[test]
    fn declining_below_threshold() {
        let series = vec![record("2025-01-01", 0.8), record("2025-01-02", 0.8)];
        let analysis = classify_trend(0.7, &series);
        assert_eq!(analysis.label, TrendLabel::Declining);
        assert!(analysis.description.contains("declining"));
    }

    #[test]
    fn tone_table_covers_all_bands() {
        use TrendLabel::{Declining, Improving, Stable};

        assert_eq!(recommended_tone(0.9, Improving), Tone::EnthusiasticEncouraging);
        assert_eq!(recommended_tone(0.9, Declining), Tone::PositiveSupportive);
        assert_eq!(recommended_tone(0.9, Stable), Tone::PositiveSupportive);

        assert_eq!(recommended_tone(0.7, Improving), Tone::OptimisticMotivating);
        assert_eq!(recommended_tone(0.7, Declining), Tone::GentleGuiding);
        assert_eq!(recommended_tone(0.7, Stable), Tone::BalancedConstructive);

        assert_eq!(recommended_tone(0.3, Improving), Tone::EncouragingSupportive);
        assert_eq!(recommended_tone(0.3, Declining), Tone::EmpatheticCaring);
        assert_eq!(recommended_tone(0.3, Stable), Tone::UnderstandingHelpful);
    }

    #[test]
    fn band_floors_are_inclusive() {
        use TrendLabel::Stable;
        assert_eq!(recommended_tone(0.8, Stable), Tone::PositiveSupportive);
        assert_eq!(recommended_tone(0.6, Stable), Tone::BalancedConstructive);
        assert_eq!(recommended_tone(0.59, Stable), Tone::UnderstandingHelpful);
    }

    #[test]
    fn insufficient_data_falls_through_to_the_stable_column() {
        use TrendLabel::InsufficientData;
        assert_eq!(recommended_tone(0.9, InsufficientData), Tone::PositiveSupportive);
        assert_eq!(recommended_tone(0.7, InsufficientData), Tone::BalancedConstructive);
        assert_eq!(recommended_tone(0.3, InsufficientData), Tone::UnderstandingHelpful);
    }

    #[test]
    fn tone_displays_as_its_fixed_string() {
        assert_eq!(
            Tone::EnthusiasticEncouraging.to_string(),
            "enthusiastic and encouraging"
        );
        assert_eq!(Tone::UnderstandingHelpful.to_string(), "understanding and helpful");
    }
}
