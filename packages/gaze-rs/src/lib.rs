//! Eye-movement analysis engine
//!
//! Turns a recorded run of `(timestamp, gaze, target)` samples into fixations,
//! saccades, tracking-quality metrics and a coarse risk label. The analysis
//! functions are pure and deterministic; parsing, validation and report
//! envelopes sit around them for callers that read runs from disk.

pub mod analysis;
pub mod error;
pub mod metrics;
pub mod parser;
#[cfg(feature = "report")]
pub mod report;
pub mod risk;
pub mod segmentation;
pub mod types;
pub mod validation;

#[cfg(feature = "parallel")]
pub use analysis::analyze_batch;
pub use analysis::analyze_eye_movement_data;
pub use error::{GazeError, Result};
pub use metrics::{
    calculate_average_fixation_duration, calculate_deviation_score, calculate_distance,
    calculate_saccade_frequency, calculate_wiggle_score,
};
#[cfg(feature = "mmap")]
pub use parser::read_samples;
pub use parser::{parse_samples, parse_samples_from_bytes, InputFormat};
#[cfg(feature = "report")]
pub use report::AnalysisReport;
pub use risk::{determine_risk_assessment, risk_breakdown};
pub use segmentation::{
    identify_fixations, identify_saccades, FIXATION_THRESHOLD, MIN_FIXATION_DURATION,
    SACCADE_THRESHOLD,
};
pub use types::*;
pub use validation::{validate_samples, RunSummary};
