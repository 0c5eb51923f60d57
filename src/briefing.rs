//! Report consumer: renders a [`RecommendationReport`] into a prompt pair
//! and asks an injected provider for a short supportive briefing.
//!
//! Prompt construction is deterministic; everything model-generated stays on
//! the far side of the [`Provider`] seam.

use std::fmt::Write as _;

use crate::engine::RecommendationReport;
use crate::providers::Provider;

pub fn build_system_prompt(report: &RecommendationReport) -> String {
    format!(
        "You are a supportive wellbeing coach. Write a short check-in message \
         in a {} tone. Do not mention scores or percentages directly.",
        report.recommended_tone
    )
}

pub fn build_user_prompt(report: &RecommendationReport) -> String {
    let mut prompt = String::new();
    let _ = writeln!(prompt, "Current state: {}", report.trend_analysis);
    let _ = writeln!(
        prompt,
        "Recommended workload adjustment: {:.1}% (risk {}, confidence {})",
        report.workload_capacity.workload_adjustment,
        report.workload_capacity.risk_level,
        report.workload_capacity.confidence,
    );
    let _ = writeln!(prompt, "Guidance:");
    for item in &report.workload_capacity.recommendations {
        let _ = writeln!(prompt, "- {item}");
    }
    let _ = writeln!(
        prompt,
        "Suggested approach: {}",
        report.detailed_recommendations.suggested_approach
    );
    prompt
}

/// Ask the injected provider to turn a report into a short message for the
/// person. The provider reference is borrowed; its lifecycle belongs to the
/// caller.
pub async fn compose_briefing(
    provider: &dyn Provider,
    report: &RecommendationReport,
    model: &str,
    temperature: f64,
) -> anyhow::Result<String> {
    let system = build_system_prompt(report);
    let user = build_user_prompt(report);
    provider
        .chat_with_system(Some(&system), &user, model, temperature)
        .await
}
