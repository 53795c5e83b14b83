//! Risk classification
//!
//! Each metric is normalized to [0, 1] against a fixed calibration constant and
//! the four values are combined with fixed weights. The constants are tuned to
//! the segmentation and wiggle heuristics and are not meant to be configured.

use crate::types::{RiskAssessment, RiskBreakdown};

/// Wiggle score that saturates the normalized wiggle component
pub const WIGGLE_SCALE: f64 = 100.0;
/// Deviation score that saturates the normalized deviation component
pub const DEVIATION_SCALE: f64 = 200.0;
/// Saccades per second at or above which the saccade component is 0
pub const SACCADE_FREQUENCY_CEILING: f64 = 2.0;
/// Average fixation duration (ms) at or above which the fixation component is 0
pub const FIXATION_DURATION_CEILING: f64 = 500.0;

pub const WIGGLE_WEIGHT: f64 = 0.4;
pub const DEVIATION_WEIGHT: f64 = 0.3;
pub const SACCADE_FREQUENCY_WEIGHT: f64 = 0.15;
pub const FIXATION_DURATION_WEIGHT: f64 = 0.15;

/// Scores below this are low risk
pub const LOW_RISK_THRESHOLD: f64 = 0.3;
/// Scores at or above this are high risk
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

impl RiskAssessment {
    /// Map a combined score to its label
    pub fn from_score(score: f64) -> Self {
        if score < LOW_RISK_THRESHOLD {
            RiskAssessment::Low
        } else if score < HIGH_RISK_THRESHOLD {
            RiskAssessment::Medium
        } else {
            RiskAssessment::High
        }
    }
}

/// Normalize the four metrics, combine them and classify the result
pub fn risk_breakdown(
    wiggle_score: f64,
    deviation_score: f64,
    saccade_frequency: f64,
    average_fixation_duration: f64,
) -> RiskBreakdown {
    let normalized_wiggle = (wiggle_score / WIGGLE_SCALE).min(1.0);
    let normalized_deviation = (deviation_score / DEVIATION_SCALE).min(1.0);
    // Fewer saccades per second reads as more atypical
    let normalized_saccade_frequency = (SACCADE_FREQUENCY_CEILING - saccade_frequency)
        .max(0.0)
        .min(1.0);
    // So do shorter fixations
    let normalized_fixation_duration = ((FIXATION_DURATION_CEILING - average_fixation_duration)
        .max(0.0)
        / FIXATION_DURATION_CEILING)
        .min(1.0);

    let score = WIGGLE_WEIGHT * normalized_wiggle
        + DEVIATION_WEIGHT * normalized_deviation
        + SACCADE_FREQUENCY_WEIGHT * normalized_saccade_frequency
        + FIXATION_DURATION_WEIGHT * normalized_fixation_duration;

    RiskBreakdown {
        normalized_wiggle,
        normalized_deviation,
        normalized_saccade_frequency,
        normalized_fixation_duration,
        score,
        assessment: RiskAssessment::from_score(score),
    }
}

/// Classify a metric vector into Low / Medium / High risk
pub fn determine_risk_assessment(
    wiggle_score: f64,
    deviation_score: f64,
    saccade_frequency: f64,
    average_fixation_duration: f64,
) -> RiskAssessment {
    risk_breakdown(
        wiggle_score,
        deviation_score,
        saccade_frequency,
        average_fixation_duration,
    )
    .assessment
}
