use crate::cli::InfoArgs;
use crate::exit_codes;
use crate::output;
use gaze_rs::risk;
use gaze_rs::segmentation;
use serde::Serialize;

#[derive(Serialize)]
struct Calibration {
    fixation_threshold: f64,
    saccade_threshold: f64,
    min_fixation_duration_ms: u64,
    wiggle_scale: f64,
    deviation_scale: f64,
    saccade_frequency_ceiling: f64,
    fixation_duration_ceiling_ms: f64,
    weights: Weights,
    low_risk_threshold: f64,
    high_risk_threshold: f64,
}

#[derive(Serialize)]
struct Weights {
    wiggle: f64,
    deviation: f64,
    saccade_frequency: f64,
    fixation_duration: f64,
}

#[derive(Serialize)]
struct InfoOutput {
    cli_version: String,
    platform: String,
    arch: String,
    calibration: Calibration,
}

fn calibration() -> Calibration {
    Calibration {
        fixation_threshold: segmentation::FIXATION_THRESHOLD,
        saccade_threshold: segmentation::SACCADE_THRESHOLD,
        min_fixation_duration_ms: segmentation::MIN_FIXATION_DURATION,
        wiggle_scale: risk::WIGGLE_SCALE,
        deviation_scale: risk::DEVIATION_SCALE,
        saccade_frequency_ceiling: risk::SACCADE_FREQUENCY_CEILING,
        fixation_duration_ceiling_ms: risk::FIXATION_DURATION_CEILING,
        weights: Weights {
            wiggle: risk::WIGGLE_WEIGHT,
            deviation: risk::DEVIATION_WEIGHT,
            saccade_frequency: risk::SACCADE_FREQUENCY_WEIGHT,
            fixation_duration: risk::FIXATION_DURATION_WEIGHT,
        },
        low_risk_threshold: risk::LOW_RISK_THRESHOLD,
        high_risk_threshold: risk::HIGH_RISK_THRESHOLD,
    }
}

pub fn execute(args: InfoArgs) -> i32 {
    let info = InfoOutput {
        cli_version: env!("CARGO_PKG_VERSION").to_string(),
        platform: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        calibration: calibration(),
    };

    if args.json {
        if let Err(e) = output::emit(&info, false, None) {
            eprintln!("Error: {}", e);
            return exit_codes::EXECUTION_ERROR;
        }
        return exit_codes::SUCCESS;
    }

    let c = &info.calibration;
    println!("gazelab CLI v{}", info.cli_version);
    println!("Platform: {} ({})", info.platform, info.arch);
    println!();
    println!("Segmentation:");
    println!("  {:<28} {}", "Fixation threshold", c.fixation_threshold);
    println!("  {:<28} {}", "Saccade threshold", c.saccade_threshold);
    println!("  {:<28} {} ms", "Minimum fixation", c.min_fixation_duration_ms);
    println!();
    println!("Risk classifier:");
    println!("  {:<28} {:<8} weight {}", "Wiggle scale", c.wiggle_scale, c.weights.wiggle);
    println!("  {:<28} {:<8} weight {}", "Deviation scale", c.deviation_scale, c.weights.deviation);
    println!(
        "  {:<28} {:<8} weight {}",
        "Saccade frequency ceiling", c.saccade_frequency_ceiling, c.weights.saccade_frequency
    );
    println!(
        "  {:<28} {:<8} weight {}",
        "Fixation duration ceiling", c.fixation_duration_ceiling_ms, c.weights.fixation_duration
    );
    println!(
        "  Low < {} <= Medium < {} <= High",
        c.low_risk_threshold, c.high_risk_threshold
    );

    exit_codes::SUCCESS
}
