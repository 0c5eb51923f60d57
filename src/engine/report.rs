//! Report assembly, the engine's only public entry point.
//!
//! Validates the current score, then composes series preparation, trend
//! classification, and the workload calculation into one report. The
//! serialized shape is the nested structure the report consumer expects.

use serde::Serialize;
use serde_json::Value;

use super::series::prepare_series;
use super::trend::{Tone, classify_trend, recommended_tone};
use super::workload::{WorkloadCapacity, calculate_workload_capacity};
use crate::error::EngineError;

/// The single output artifact: constructed fresh on every call, never
/// mutated, no persistent identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub current_wellbeing_score: f64,
    pub historical_average: Option<f64>,
    pub trend_analysis: String,
    pub recommended_tone: Tone,
    pub workload_capacity: WorkloadCapacity,
    pub detailed_recommendations: DetailedRecommendations,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedRecommendations {
    pub communication_style: Tone,
    pub suggested_approach: &'static str,
}

/// Approach suggestions use a coarser three-band lookup than the four-band
/// workload table.
static APPROACH_TABLE: [(f64, &str); 3] = [
    (
        0.8,
        "Focus on maintaining positive momentum and celebrating achievements",
    ),
    (
        0.6,
        "Balance encouragement with practical guidance for improvement",
    ),
    (
        0.0,
        "Emphasize support and gentle encouragement while offering concrete help",
    ),
];

fn approach_suggestion(score: f64) -> &'static str {
    APPROACH_TABLE
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map_or(APPROACH_TABLE[APPROACH_TABLE.len() - 1].1, |entry| entry.1)
}

/// Derive a full recommendation report from the raw history feed and one
/// fresh score.
///
/// The score must lie in `[0, 1]` inclusive; it is validated here before
/// anything else runs, so downstream stages assume a valid score. The whole
/// computation is deterministic: identical inputs give identical reports.
pub fn recommend(records: &[Value], current_score: f64) -> Result<RecommendationReport, EngineError> {
    if !(0.0..=1.0).contains(&current_score) {
        return Err(EngineError::OutOfRange(current_score));
    }

    let series = prepare_series(records)?;
    let trend = classify_trend(current_score, &series);
    let tone = recommended_tone(current_score, trend.label);
    let workload_capacity = calculate_workload_capacity(current_score);

    Ok(RecommendationReport {
        current_wellbeing_score: current_score,
        historical_average: trend.historical_average,
        trend_analysis: trend.description,
        recommended_tone: tone,
        workload_capacity,
        detailed_recommendations: DetailedRecommendations {
            communication_style: tone,
            suggested_approach: approach_suggestion(current_score),
        },
    })
}
