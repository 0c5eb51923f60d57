//! Pure scoring/decision engine.
//!
//! Takes a raw history feed plus one fresh wellbeing score and derives a
//! trend classification, a communication tone, and a workload-capacity
//! adjustment, assembled into a single [`RecommendationReport`].
//!
//! No I/O, no logging, no shared state: every invocation is an independent
//! pure function, safe to call from any number of threads without locks.

pub mod report;
pub mod series;
pub mod trend;
pub mod workload;

pub use report::{DetailedRecommendations, RecommendationReport, recommend};
pub use series::{WellbeingRecord, prepare_series};
pub use trend::{Tone, TrendAnalysis, TrendLabel, classify_trend, recommended_tone};
pub use workload::{Confidence, RiskLevel, WorkloadCapacity, calculate_workload_capacity};
