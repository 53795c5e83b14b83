use gaze_rs::{
    analyze_eye_movement_data, parser, risk_breakdown, validate_samples, AnalysisResult, Point,
    Sample,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn result_json(result: &AnalysisResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| error_json(&e.to_string()))
}

// ============================================================================
// ANALYSIS
// ============================================================================

/// Analyze a run given as JSON (`[{timestamp, position, targetPosition}]` or
/// `{"samples": [...]}`).
///
/// Returns the AnalysisResult as JSON, or `{"error": "..."}` when the input
/// cannot be parsed or is not sorted by timestamp.
#[wasm_bindgen]
pub fn analyze_samples_json(samples_json: &str) -> String {
    set_panic_hook();

    let samples = match parser::parse_samples_json(samples_json) {
        Ok(s) => s,
        Err(e) => return error_json(&e.to_string()),
    };
    if let Err(e) = validate_samples(&samples) {
        return error_json(&e.to_string());
    }

    result_json(&analyze_eye_movement_data(&samples))
}

/// Analyze a run given as flat typed arrays.
///
/// timestamps: milliseconds, one per sample
/// positions: interleaved gaze x,y (2 values per sample)
/// targets: interleaved target x,y (2 values per sample)
#[wasm_bindgen]
pub fn analyze_samples_flat(timestamps: &[f64], positions: &[f64], targets: &[f64]) -> String {
    set_panic_hook();

    let n = timestamps.len();
    if positions.len() != n * 2 || targets.len() != n * 2 {
        return error_json(&format!(
            "expected {} interleaved x,y values, got {} positions and {} targets",
            n * 2,
            positions.len(),
            targets.len()
        ));
    }

    let mut samples = Vec::with_capacity(n);
    for (i, &ts) in timestamps.iter().enumerate() {
        if !ts.is_finite() || ts < 0.0 {
            return error_json(&format!("invalid timestamp at sample {}", i));
        }
        // performance.now() style fractional milliseconds are truncated
        samples.push(Sample::new(
            ts as u64,
            Point::new(positions[2 * i], positions[2 * i + 1]),
            Point::new(targets[2 * i], targets[2 * i + 1]),
        ));
    }

    if let Err(e) = validate_samples(&samples) {
        return error_json(&e.to_string());
    }

    result_json(&analyze_eye_movement_data(&samples))
}

// ============================================================================
// RISK
// ============================================================================

/// Combined risk score in [0, 1]
#[wasm_bindgen]
pub fn risk_score(
    wiggle_score: f64,
    deviation_score: f64,
    saccade_frequency: f64,
    average_fixation_duration: f64,
) -> f64 {
    risk_breakdown(
        wiggle_score,
        deviation_score,
        saccade_frequency,
        average_fixation_duration,
    )
    .score
}

/// "Low Risk", "Medium Risk" or "High Risk"
#[wasm_bindgen]
pub fn risk_label(
    wiggle_score: f64,
    deviation_score: f64,
    saccade_frequency: f64,
    average_fixation_duration: f64,
) -> String {
    risk_breakdown(
        wiggle_score,
        deviation_score,
        saccade_frequency,
        average_fixation_duration,
    )
    .assessment
    .to_string()
}
