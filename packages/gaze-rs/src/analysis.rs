#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::metrics::{
    calculate_average_fixation_duration, calculate_deviation_score, calculate_saccade_frequency,
    calculate_wiggle_score,
};
use crate::risk::determine_risk_assessment;
use crate::segmentation::{identify_fixations, identify_saccades};
use crate::types::{AnalysisResult, Sample};

/// Run the full pipeline over one recorded run.
///
/// `samples` must be sorted non-decreasing by timestamp; the run is never
/// re-sorted (see [`crate::validation::validate_samples`]). A run with fewer
/// than two samples gives [`AnalysisResult::default`], which is labelled low
/// risk.
pub fn analyze_eye_movement_data(samples: &[Sample]) -> AnalysisResult {
    let [first, .., last] = samples else {
        return AnalysisResult::default();
    };

    let total_duration = last.timestamp.saturating_sub(first.timestamp);

    let fixations = identify_fixations(samples);
    let saccades = identify_saccades(samples, &fixations);

    let average_fixation_duration = calculate_average_fixation_duration(&fixations);
    let saccade_frequency = calculate_saccade_frequency(&saccades, total_duration);
    let wiggle_score = calculate_wiggle_score(samples);
    let deviation_score = calculate_deviation_score(samples);

    let risk_assessment = determine_risk_assessment(
        wiggle_score,
        deviation_score,
        saccade_frequency,
        average_fixation_duration,
    );

    log::debug!(
        "Analyzed {} samples over {}ms: {} fixations, {} saccades, wiggle={:.3}, deviation={:.3} -> {}",
        samples.len(),
        total_duration,
        fixations.len(),
        saccades.len(),
        wiggle_score,
        deviation_score,
        risk_assessment
    );

    AnalysisResult {
        fixations,
        saccades,
        average_fixation_duration,
        saccade_frequency,
        wiggle_score,
        deviation_score,
        risk_assessment,
    }
}

/// Analyze independent runs in parallel. Results keep the input order.
#[cfg(feature = "parallel")]
pub fn analyze_batch(runs: &[Vec<Sample>]) -> Vec<AnalysisResult> {
    log::info!("Analyzing batch of {} runs", runs.len());
    runs.par_iter()
        .map(|run| analyze_eye_movement_data(run))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, RiskAssessment};

    fn tracked(t: u64, pos: (f64, f64), target: (f64, f64)) -> Sample {
        Sample::new(t, Point::new(pos.0, pos.1), Point::new(target.0, target.1))
    }

    #[test]
    fn test_empty_run_defaults() {
        let result = analyze_eye_movement_data(&[]);
        assert!(result.fixations.is_empty());
        assert!(result.saccades.is_empty());
        assert_eq!(result.average_fixation_duration, 0.0);
        assert_eq!(result.saccade_frequency, 0.0);
        assert_eq!(result.wiggle_score, 0.0);
        assert_eq!(result.deviation_score, 0.0);
        assert_eq!(result.risk_assessment, RiskAssessment::Low);
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_single_sample_defaults() {
        // Off-target gaze would otherwise score a deviation of 50
        let result = analyze_eye_movement_data(&[tracked(5, (10.0, 10.0), (40.0, 50.0))]);
        assert_eq!(result, AnalysisResult::default());
        assert_eq!(result.deviation_score, 0.0);
        assert_eq!(result.risk_assessment, RiskAssessment::Low);
    }

    #[test]
    fn test_two_samples_are_analyzed() {
        let result = analyze_eye_movement_data(&[
            tracked(0, (10.0, 10.0), (40.0, 50.0)),
            tracked(10, (10.0, 10.0), (40.0, 50.0)),
        ]);
        assert_eq!(result.deviation_score, 50.0);
    }

    #[test]
    fn test_perfect_tracking() {
        let samples: Vec<Sample> = (0..5u64)
            .map(|i| {
                let p = (10.0 + i as f64 * 5.0, 50.0);
                tracked(i * 50, p, p)
            })
            .collect();

        let result = analyze_eye_movement_data(&samples);
        assert_eq!(result.deviation_score, 0.0);
        assert_eq!(result.wiggle_score, 0.0);
    }

    #[test]
    fn test_pipeline_two_fixations() {
        let mut samples: Vec<Sample> = (0..=3)
            .map(|i| tracked(i * 100, (100.0, 100.0), (100.0, 100.0)))
            .collect();
        samples.push(tracked(400, (150.0, 150.0), (200.0, 200.0)));
        samples.extend((5..=8).map(|i| tracked(i * 100, (200.0, 200.0), (200.0, 200.0))));

        let result = analyze_eye_movement_data(&samples);
        assert_eq!(result.fixations.len(), 2);
        assert_eq!(result.saccades.len(), 1);
        assert_eq!(result.average_fixation_duration, 300.0);
        // one saccade over 800 ms
        assert!((result.saccade_frequency - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let samples: Vec<Sample> = (0..300u64)
            .map(|i| {
                let t = i as f64;
                tracked(
                    i * 16,
                    (50.0 + (t * 0.1).sin() * 30.0, 50.0 + (t * 0.07).cos() * 3.0),
                    (50.0 + (t * 0.1).sin() * 32.0, 50.0),
                )
            })
            .collect();

        let a = analyze_eye_movement_data(&samples);
        let b = analyze_eye_movement_data(&samples);
        assert_eq!(a, b);
        assert_eq!(a.wiggle_score.to_bits(), b.wiggle_score.to_bits());
        assert_eq!(a.deviation_score.to_bits(), b.deviation_score.to_bits());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_batch_preserves_order() {
        let steady: Vec<Sample> = (0..10)
            .map(|i| tracked(i * 50, (40.0, 40.0), (40.0, 40.0)))
            .collect();
        let runs = vec![steady.clone(), Vec::new(), steady.clone()];

        let results = analyze_batch(&runs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], analyze_eye_movement_data(&steady));
        assert_eq!(results[1], AnalysisResult::default());
        assert_eq!(results[2], results[0]);
    }
}
