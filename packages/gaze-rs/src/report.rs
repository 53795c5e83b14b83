use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::analyze_eye_movement_data;
use crate::risk::risk_breakdown;
use crate::types::{AnalysisResult, RiskBreakdown, Sample};
use crate::validation::RunSummary;

/// Analysis result plus the metadata a caller needs to file it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: String,
    pub source: Option<String>,
    pub sample_count: usize,
    pub duration_ms: u64,
    pub result: AnalysisResult,
    pub breakdown: RiskBreakdown,
    pub created_at: String,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, sample_count: usize, duration_ms: u64) -> Self {
        // Runs too short to analyze are low risk by definition, not by score
        let breakdown = if sample_count < 2 {
            RiskBreakdown::default()
        } else {
            risk_breakdown(
                result.wiggle_score,
                result.deviation_score,
                result.saccade_frequency,
                result.average_fixation_duration,
            )
        };

        Self {
            id: Uuid::new_v4().to_string(),
            source: None,
            sample_count,
            duration_ms,
            result,
            breakdown,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Analyze `samples` and wrap the result
    pub fn from_samples(samples: &[Sample]) -> Self {
        let summary = RunSummary::of(samples);
        Self::new(
            analyze_eye_movement_data(samples),
            summary.sample_count,
            summary.duration_ms,
        )
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
