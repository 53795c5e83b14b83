use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Serialize a value to JSON (pretty or compact).
pub fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String, String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.map_err(|e| format!("JSON serialization failed: {}", e))
}

/// Write a JSON document to a file, or to stdout followed by a newline.
pub fn write_output(json: &str, output_path: Option<&Path>) -> Result<(), String> {
    if let Some(path) = output_path {
        return std::fs::write(path, json)
            .map_err(|e| format!("Failed to write output file '{}': {}", path.display(), e));
    }

    let mut handle = std::io::stdout().lock();
    handle
        .write_all(json.as_bytes())
        .and_then(|_| handle.write_all(b"\n"))
        .map_err(|e| format!("Failed to write to stdout: {}", e))
}

/// Serialize and write in one step.
pub fn emit<T: Serialize>(value: &T, compact: bool, output_path: Option<&Path>) -> Result<(), String> {
    let json = to_json(value, compact)?;
    write_output(&json, output_path)
}
