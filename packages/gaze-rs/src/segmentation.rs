//! Fixation and saccade segmentation
//!
//! Splits a run of gaze samples into fixations (stable gaze periods) and the
//! saccades that connect them.

use crate::metrics::calculate_distance;
use crate::types::{Fixation, Point, Saccade, Sample};

/// Maximum distance (input units) between a sample and the open window's
/// centroid for the sample to join the fixation
pub const FIXATION_THRESHOLD: f64 = 30.0;

/// Minimum centroid distance (input units) between two adjacent fixations for
/// the transition to count as a saccade
pub const SACCADE_THRESHOLD: f64 = 50.0;

/// Shortest window (ms) kept as a fixation
pub const MIN_FIXATION_DURATION: u64 = 100;

/// Candidate fixation being grown sample by sample
struct FixationWindow {
    start_time: u64,
    last_time: u64,
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

impl FixationWindow {
    fn open(sample: &Sample) -> Self {
        Self {
            start_time: sample.timestamp,
            last_time: sample.timestamp,
            sum_x: sample.position.x,
            sum_y: sample.position.y,
            count: 1,
        }
    }

    /// Mean of every position absorbed so far
    fn centroid(&self) -> Point {
        Point::new(self.sum_x / self.count as f64, self.sum_y / self.count as f64)
    }

    fn absorb(&mut self, sample: &Sample) {
        self.sum_x += sample.position.x;
        self.sum_y += sample.position.y;
        self.count += 1;
        self.last_time = sample.timestamp;
    }

    fn into_fixation(self, end_time: u64) -> Option<Fixation> {
        let duration = end_time.saturating_sub(self.start_time);
        if duration < MIN_FIXATION_DURATION {
            return None;
        }

        Some(Fixation {
            start_time: self.start_time,
            end_time,
            duration,
            position: self.centroid(),
        })
    }
}

/// Identify fixations in a chronologically sorted run.
///
/// Each sample is compared against the centroid of all samples already in the
/// open window (not a sliding window), so a slow drift can be absorbed as long
/// as every step stays within [`FIXATION_THRESHOLD`] of the running mean.
/// Windows shorter than [`MIN_FIXATION_DURATION`] are dropped, not merged.
pub fn identify_fixations(samples: &[Sample]) -> Vec<Fixation> {
    let mut fixations = Vec::new();

    let Some((first, rest)) = samples.split_first() else {
        return fixations;
    };

    let mut window = FixationWindow::open(first);

    for sample in rest {
        if calculate_distance(sample.position, window.centroid()) <= FIXATION_THRESHOLD {
            window.absorb(sample);
            continue;
        }

        let closed = std::mem::replace(&mut window, FixationWindow::open(sample));
        let end_time = closed.last_time;
        if let Some(fixation) = closed.into_fixation(end_time) {
            fixations.push(fixation);
        }
    }

    // The open window always ends on the final sample
    if let Some(last) = samples.last() {
        if let Some(fixation) = window.into_fixation(last.timestamp) {
            fixations.push(fixation);
        }
    }

    log::trace!(
        "Segmented {} samples into {} fixations",
        samples.len(),
        fixations.len()
    );

    fixations
}

/// Derive saccades from adjacent fixation pairs.
///
/// Timing and positions come entirely from the fixation boundaries; `_samples`
/// is accepted so callers can pass the run alongside its fixations. A pair
/// that starts and ends at the same millisecond gets a velocity of 0.
pub fn identify_saccades(_samples: &[Sample], fixations: &[Fixation]) -> Vec<Saccade> {
    if fixations.len() < 2 {
        return Vec::new();
    }

    fixations
        .windows(2)
        .filter_map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let distance = calculate_distance(from.position, to.position);
            if distance < SACCADE_THRESHOLD {
                return None;
            }

            let duration = to.start_time.saturating_sub(from.end_time);
            let velocity = if duration == 0 {
                0.0
            } else {
                distance / duration as f64
            };

            Some(Saccade {
                start_time: from.end_time,
                end_time: to.start_time,
                start_position: from.position,
                end_position: to.position,
                duration,
                velocity,
            })
        })
        .collect()
}
