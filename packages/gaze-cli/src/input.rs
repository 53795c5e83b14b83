use gaze_rs::{parser, validate_samples, GazeError, Sample};
use std::path::Path;

/// Check that a run exists and has a readable format, without parsing it.
pub fn validate_file(file_path: &str) -> Result<(), String> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("Input file not found: {}", file_path));
    }

    parser::format_for_path(path).map_err(|e| match e {
        GazeError::UnsupportedFileType(ext) => format!(
            "Unsupported file extension '{}'. Supported: json, csv, tsv, txt, dat",
            ext
        ),
        other => other.to_string(),
    })?;

    Ok(())
}

/// Read a run and check the ordering/finiteness preconditions of the engine.
pub fn load_run(file_path: &str) -> Result<Vec<Sample>, String> {
    validate_file(file_path)?;

    let samples = gaze_rs::read_samples(file_path).map_err(|e| e.to_string())?;
    validate_samples(&samples).map_err(|e| format!("{}: {}", file_path, e))?;

    log::info!("Loaded {} samples from {}", samples.len(), file_path);
    Ok(samples)
}
