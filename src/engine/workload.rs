//! Workload-capacity calculation.
//!
//! A linear map from wellbeing score to a percentage workload adjustment
//! (score 0 → −50%, score 1 → +15%), with band-dependent asymmetric capping:
//! positive adjustments are clamped to the band's maximum increase, negative
//! adjustments pass through unmodified.

use serde::Serialize;
use strum::Display;

/// Risk of increasing workload at the current wellbeing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    Elevated,
    High,
}

/// Confidence in the adjustment recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Quantitative workload recommendation for one score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadCapacity {
    /// Percentage adjustment relative to baseline, rounded to one decimal.
    pub workload_adjustment: f64,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
    /// Four fixed guidance strings for the score band.
    pub recommendations: Vec<&'static str>,
}

/// One row of the capacity table: a score-band floor plus the band's risk,
/// confidence, positive-adjustment cap, and guidance list. Declarative data
/// so the boundaries stay auditable.
struct CapacityBand {
    floor: f64,
    risk_level: RiskLevel,
    confidence: Confidence,
    max_increase: f64,
    guidance: [&'static str; 4],
}

static CAPACITY_BANDS: [CapacityBand; 4] = [
    CapacityBand {
        floor: 0.8,
        risk_level: RiskLevel::Low,
        confidence: Confidence::High,
        max_increase: 15.0,
        guidance: [
            "Consider taking on additional challenging projects",
            "Good time for learning new skills",
            "Can handle increased responsibility",
            "Monitor for signs of overextension",
        ],
    },
    CapacityBand {
        floor: 0.6,
        risk_level: RiskLevel::Moderate,
        confidence: Confidence::Medium,
        max_increase: 10.0,
        guidance: [
            "Maintain current workload",
            "Focus on optimization and efficiency",
            "Build in buffer for unexpected tasks",
            "Regular check-ins to monitor energy levels",
        ],
    },
    CapacityBand {
        floor: 0.4,
        risk_level: RiskLevel::Elevated,
        confidence: Confidence::Medium,
        max_increase: 5.0,
        guidance: [
            "Prioritize essential tasks only",
            "Delegate non-critical work",
            "Schedule regular breaks",
            "Review and postpone non-urgent commitments",
        ],
    },
    CapacityBand {
        floor: 0.0,
        risk_level: RiskLevel::High,
        confidence: Confidence::High,
        max_increase: 0.0,
        guidance: [
            "Significant workload reduction needed",
            "Focus only on critical tasks",
            "Seek additional support and resources",
            "Consider short-term adjustments to responsibilities",
        ],
    },
];

fn band_for(score: f64) -> &'static CapacityBand {
    CAPACITY_BANDS
        .iter()
        .find(|band| score >= band.floor)
        .unwrap_or(&CAPACITY_BANDS[CAPACITY_BANDS.len() - 1])
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Map a validated score in `[0, 1]` to a workload recommendation.
pub fn calculate_workload_capacity(current_score: f64) -> WorkloadCapacity {
    let base_adjustment = -50.0 + current_score * 65.0;
    let band = band_for(current_score);

    // Only positive adjustments are capped; reductions always pass through.
    let final_adjustment = if base_adjustment > 0.0 {
        base_adjustment.min(band.max_increase)
    } else {
        base_adjustment
    };

    WorkloadCapacity {
        workload_adjustment: round_one_decimal(final_adjustment),
        risk_level: band.risk_level,
        confidence: band.confidence,
        recommendations: band.guidance.to_vec(),
    }
}
