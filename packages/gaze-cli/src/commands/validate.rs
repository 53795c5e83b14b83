use crate::cli::ValidateArgs;
use crate::exit_codes;
use crate::input;
use crate::output;
use gaze_rs::{parser, RunSummary};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ValidateOutput {
    file: String,
    exists: bool,
    supported: bool,
    format: Option<String>,
    size_bytes: Option<u64>,
    summary: Option<RunSummary>,
    error: Option<String>,
}

pub fn execute(args: ValidateArgs) -> i32 {
    let path = Path::new(&args.file);
    let exists = path.is_file();
    let format = parser::format_for_path(path).ok();
    let supported = format.is_some();
    let size_bytes = std::fs::metadata(path).ok().map(|m| m.len());

    let (summary, error) = match input::load_run(&args.file) {
        Ok(samples) => (Some(RunSummary::of(&samples)), None),
        Err(msg) => (None, Some(msg)),
    };

    let result = ValidateOutput {
        file: args.file.clone(),
        exists,
        supported,
        format: format.map(|f| match f {
            Some(fmt) => format!("{:?}", fmt),
            None => "Sniffed".to_string(),
        }),
        size_bytes,
        summary,
        error,
    };

    if args.json {
        if let Err(e) = output::emit(&result, false, None) {
            eprintln!("Error: {}", e);
            return exit_codes::EXECUTION_ERROR;
        }
    } else if let Some(ref err) = result.error {
        eprintln!("Error: {}", err);
    } else if let Some(ref summary) = result.summary {
        println!(
            "File '{}' is valid ({} samples over {} ms)",
            args.file, summary.sample_count, summary.duration_ms
        );
    }

    if result.error.is_some() {
        exit_codes::INPUT_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
