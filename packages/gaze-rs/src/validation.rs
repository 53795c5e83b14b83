//! Input precondition checks
//!
//! The analysis functions assume a sorted run with finite coordinates and never
//! repair their input. Callers that receive samples from outside (files, the
//! browser) check them here first.

use serde::Serialize;

use crate::error::{GazeError, Result};
use crate::types::Sample;

/// Shape of a run, for reporting before or alongside analysis
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub sample_count: usize,
    pub first_timestamp: Option<u64>,
    pub last_timestamp: Option<u64>,
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn of(samples: &[Sample]) -> Self {
        let first_timestamp = samples.first().map(|s| s.timestamp);
        let last_timestamp = samples.last().map(|s| s.timestamp);
        let duration_ms = match (first_timestamp, last_timestamp) {
            (Some(first), Some(last)) => last.saturating_sub(first),
            _ => 0,
        };

        Self {
            sample_count: samples.len(),
            first_timestamp,
            last_timestamp,
            duration_ms,
        }
    }
}

/// Check that every coordinate is finite and timestamps never go backwards.
///
/// Returns the first violation found.
pub fn validate_samples(samples: &[Sample]) -> Result<()> {
    let mut previous: Option<u64> = None;

    for (index, sample) in samples.iter().enumerate() {
        if !sample.position.is_finite() || !sample.target_position.is_finite() {
            return Err(GazeError::NonFiniteCoordinate { index });
        }

        if let Some(prev) = previous {
            if sample.timestamp < prev {
                return Err(GazeError::NonMonotonicTimestamp {
                    index,
                    previous: prev,
                    current: sample.timestamp,
                });
            }
        }
        previous = Some(sample.timestamp);
    }

    Ok(())
}
