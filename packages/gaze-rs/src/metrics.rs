//! Scalar tracking-quality metrics
//!
//! Two metrics work on the segmented data (average fixation duration, saccade
//! frequency), two on the raw samples (wiggle, deviation). All of them return
//! 0 for inputs too short to measure.

use crate::types::{Fixation, Point, Saccade, Sample};

/// Euclidean distance between two points
#[inline]
pub fn calculate_distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Mean fixation duration in milliseconds, 0 for no fixations
pub fn calculate_average_fixation_duration(fixations: &[Fixation]) -> f64 {
    if fixations.is_empty() {
        return 0.0;
    }

    let total: f64 = fixations.iter().map(|f| f.duration as f64).sum();
    total / fixations.len() as f64
}

/// Saccades per second over a run lasting `total_duration_ms`.
///
/// A zero-length run yields 0 rather than infinity.
pub fn calculate_saccade_frequency(saccades: &[Saccade], total_duration_ms: u64) -> f64 {
    if total_duration_ms == 0 {
        return 0.0;
    }

    saccades.len() as f64 / (total_duration_ms as f64 / 1000.0)
}

/// Average off-axis movement of the gaze relative to the target's motion.
///
/// For every triple of consecutive samples the target's dominant axis is taken
/// from its summed absolute deltas over both steps. While the target moves
/// horizontally, vertical gaze movement on the last step counts as wiggle, and
/// vice versa. Ties count as vertical target motion. The sum is divided by
/// `len - 2`.
pub fn calculate_wiggle_score(samples: &[Sample]) -> f64 {
    if samples.len() < 3 {
        return 0.0;
    }

    let total: f64 = samples
        .windows(3)
        .map(|w| {
            let (a, b, c) = (&w[0], &w[1], &w[2]);

            let target_dx = (b.target_position.x - a.target_position.x).abs()
                + (c.target_position.x - b.target_position.x).abs();
            let target_dy = (b.target_position.y - a.target_position.y).abs()
                + (c.target_position.y - b.target_position.y).abs();

            if target_dx > target_dy {
                (c.position.y - b.position.y).abs()
            } else {
                (c.position.x - b.position.x).abs()
            }
        })
        .sum();

    total / (samples.len() - 2) as f64
}

/// Mean distance between observed gaze and target, 0 for no samples
pub fn calculate_deviation_score(samples: &[Sample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let total: f64 = samples
        .iter()
        .map(|s| calculate_distance(s.position, s.target_position))
        .sum();
    total / samples.len() as f64
}
