use serde::Deserialize;
use std::path::Path;

use crate::error::{GazeError, Result};
use crate::types::{Point, Sample};

/// On-disk layout of a recorded run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `[{timestamp, position, targetPosition}, ...]` or `{"samples": [...]}`
    Json,
    /// One sample per line: `timestamp, x, y, target_x, target_y`
    Delimited,
}

impl InputFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(InputFormat::Json),
            "csv" | "tsv" | "txt" | "dat" => Some(InputFormat::Delimited),
            _ => None,
        }
    }

    /// Guess from the first non-whitespace byte
    pub fn sniff(content: &[u8]) -> Self {
        match content.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'[') | Some(b'{') => InputFormat::Json,
            _ => InputFormat::Delimited,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SampleDocument {
    Bare(Vec<Sample>),
    Wrapped { samples: Vec<Sample> },
}

/// Parse a JSON run, either a bare array or an object with a `samples` array
pub fn parse_samples_json(content: &str) -> Result<Vec<Sample>> {
    let document: SampleDocument = serde_json::from_str(content).map_err(|e| {
        GazeError::ParseError(format!(
            "expected an array of samples or {{\"samples\": [...]}}: {}",
            e
        ))
    })?;

    let samples = match document {
        SampleDocument::Bare(samples) => samples,
        SampleDocument::Wrapped { samples } => samples,
    };

    log::info!("Loaded {} samples from JSON", samples.len());
    Ok(samples)
}

fn parse_timestamp(field: &str) -> Option<u64> {
    if let Ok(ts) = field.parse::<u64>() {
        return Some(ts);
    }
    // Exporters sometimes write "1200.0"
    let value = field.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Some(value as u64)
    } else {
        None
    }
}

fn parse_row(fields: &[&str]) -> Option<Sample> {
    let timestamp = parse_timestamp(fields[0])?;
    let mut coords = [0.0f64; 4];
    for (slot, field) in coords.iter_mut().zip(&fields[1..]) {
        *slot = field.parse::<f64>().ok()?;
    }

    Some(Sample::new(
        timestamp,
        Point::new(coords[0], coords[1]),
        Point::new(coords[2], coords[3]),
    ))
}

/// Parse a delimited run (comma, semicolon, tab or space separated).
///
/// Blank lines and `#` comments are skipped, as is a header line before the
/// first sample. Malformed rows are logged and skipped. Text with no data rows
/// is an empty run; rows that all fail to parse are an error.
pub fn parse_samples_delimited(content: &str) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        if fields.len() != 5 {
            log::warn!(
                "Line {} has {} fields (expected 5), skipping",
                line_no + 1,
                fields.len()
            );
            skipped += 1;
            continue;
        }

        match parse_row(&fields) {
            Some(sample) => samples.push(sample),
            None if samples.is_empty() && skipped == 0 && fields[0].parse::<f64>().is_err() => {
                log::debug!("Treating line {} as header: {}", line_no + 1, trimmed);
            }
            None => {
                log::warn!("Line {} is not a valid sample, skipping", line_no + 1);
                skipped += 1;
            }
        }
    }

    if samples.is_empty() && skipped > 0 {
        return Err(GazeError::ParseError(format!(
            "No valid gaze samples found ({} malformed rows)",
            skipped
        )));
    }

    log::info!(
        "Loaded {} samples from delimited text ({} rows skipped)",
        samples.len(),
        skipped
    );

    Ok(samples)
}

/// Parse a run in the given format.
///
/// An empty run is not an error in either format: blank content, `[]`,
/// `{"samples": []}` and delimited text without data rows all give an empty
/// vector, which analyzes to the default low-risk result.
pub fn parse_samples(content: &str, format: InputFormat) -> Result<Vec<Sample>> {
    if content.trim().is_empty() {
        log::info!("Input is empty, no samples loaded");
        return Ok(Vec::new());
    }

    match format {
        InputFormat::Json => parse_samples_json(content),
        InputFormat::Delimited => parse_samples_delimited(content),
    }
}

/// Parse a run from raw bytes (e.g. a memory-mapped file), sniffing the
/// format when none is given
pub fn parse_samples_from_bytes(content: &[u8], format: Option<InputFormat>) -> Result<Vec<Sample>> {
    let text = std::str::from_utf8(content)
        .map_err(|e| GazeError::ParseError(format!("input is not valid UTF-8: {}", e)))?;
    let format = format.unwrap_or_else(|| InputFormat::sniff(content));
    parse_samples(text, format)
}

/// Resolve the format of a file from its extension.
///
/// Files without an extension are sniffed later; unknown extensions are rejected.
pub fn format_for_path(path: &Path) -> Result<Option<InputFormat>> {
    match path.extension().and_then(|e| e.to_str()) {
        None => Ok(None),
        Some(ext) => InputFormat::from_extension(ext)
            .map(Some)
            .ok_or_else(|| GazeError::UnsupportedFileType(ext.to_string())),
    }
}

/// Read a recorded run from disk
#[cfg(feature = "mmap")]
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(GazeError::FileNotFound(path.display().to_string()));
    }

    let format = format_for_path(path)?;

    // Zero-length files cannot be mapped on every platform
    if std::fs::metadata(path)?.len() == 0 {
        return parse_samples_from_bytes(&[], format);
    }

    let file = std::fs::File::open(path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    log::debug!("Mapped {} ({} bytes)", path.display(), mmap.len());
    parse_samples_from_bytes(&mmap, format)
}
