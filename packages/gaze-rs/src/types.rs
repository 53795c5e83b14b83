use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the run's coordinate space (the screening app uses 0-100
/// percent-of-viewport units)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One tracked frame: where the subject looked and where they were told to look.
///
/// A run is a slice of samples sorted non-decreasing by `timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Milliseconds, monotonic within one run
    pub timestamp: u64,
    /// Observed gaze position
    pub position: Point,
    /// Instructed target position
    #[serde(alias = "target_position")]
    pub target_position: Point,
}

impl Sample {
    pub fn new(timestamp: u64, position: Point, target_position: Point) -> Self {
        Self {
            timestamp,
            position,
            target_position,
        }
    }
}

/// A stable gaze period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixation {
    #[serde(alias = "start_time")]
    pub start_time: u64,
    #[serde(alias = "end_time")]
    pub end_time: u64,
    pub duration: u64,
    /// Centroid of the absorbed samples' observed positions
    pub position: Point,
}

/// A transition between two adjacent fixations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saccade {
    #[serde(alias = "start_time")]
    pub start_time: u64,
    #[serde(alias = "end_time")]
    pub end_time: u64,
    #[serde(alias = "start_position")]
    pub start_position: Point,
    #[serde(alias = "end_position")]
    pub end_position: Point,
    pub duration: u64,
    /// Units per millisecond
    pub velocity: f64,
}

/// Coarse three-level output of the risk classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RiskAssessment {
    #[default]
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskAssessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAssessment::Low => "Low Risk",
            RiskAssessment::Medium => "Medium Risk",
            RiskAssessment::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized classifier inputs and the weighted score they produce
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    pub normalized_wiggle: f64,
    pub normalized_deviation: f64,
    pub normalized_saccade_frequency: f64,
    pub normalized_fixation_duration: f64,
    pub score: f64,
    pub assessment: RiskAssessment,
}

/// Everything derived from one run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub fixations: Vec<Fixation>,
    pub saccades: Vec<Saccade>,
    #[serde(alias = "average_fixation_duration")]
    pub average_fixation_duration: f64,
    /// Saccades per second over the run
    #[serde(alias = "saccade_frequency")]
    pub saccade_frequency: f64,
    #[serde(alias = "wiggle_score")]
    pub wiggle_score: f64,
    #[serde(alias = "deviation_score")]
    pub deviation_score: f64,
    #[serde(alias = "risk_assessment")]
    pub risk_assessment: RiskAssessment,
}
