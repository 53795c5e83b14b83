use crate::cli::BatchArgs;
use crate::exit_codes;
use crate::input;
use crate::output;
use gaze_rs::{AnalysisReport, Sample};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub fn execute(args: BatchArgs) -> i32 {
    let files = match resolve_files(&args) {
        Ok(f) => f,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if files.is_empty() {
        eprintln!("Error: No matching files found");
        return exit_codes::INPUT_ERROR;
    }

    if args.dry_run {
        for f in &files {
            println!("{}", f);
        }
        if !args.quiet {
            eprintln!("Found {} file(s)", files.len());
        }
        return exit_codes::SUCCESS;
    }

    if let Some(ref dir) = args.output_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: Failed to create output directory '{}': {}", dir, e);
            return exit_codes::EXECUTION_ERROR;
        }
    }

    let total = files.len();
    let mut failed = 0usize;
    let start_time = Instant::now();

    // Parsing is sequential so progress and errors come out in file order
    let mut runs: Vec<(String, Vec<Sample>)> = Vec::with_capacity(total);
    for (i, file_path) in files.iter().enumerate() {
        if !args.quiet {
            eprintln!("[{}/{}] {}...", i + 1, total, file_path);
        }

        match input::load_run(file_path) {
            Ok(samples) => runs.push((file_path.clone(), samples)),
            Err(msg) => {
                eprintln!("  Error: {}", msg);
                failed += 1;
                if !args.continue_on_error {
                    break;
                }
            }
        }
    }

    let reports: Vec<AnalysisReport> = runs
        .par_iter()
        .map(|(path, samples)| AnalysisReport::from_samples(samples).with_source(path.clone()))
        .collect();

    let mut succeeded = 0usize;
    let mut taken: HashSet<PathBuf> = HashSet::new();
    for report in &reports {
        let written = match args.output_dir {
            Some(ref dir) => {
                let source = report.source.as_deref().unwrap_or("output");
                let out_path = unique_output_path(dir, source, &mut taken);
                output::emit(report, args.compact, Some(out_path.as_path()))
            }
            // JSONL to stdout
            None => output::emit(report, true, None),
        };

        match written {
            Ok(()) => succeeded += 1,
            Err(e) => {
                eprintln!("  Error writing output: {}", e);
                failed += 1;
                if !args.continue_on_error {
                    break;
                }
            }
        }
    }

    if !args.quiet {
        eprintln!(
            "Batch complete: {}/{} succeeded, {}/{} failed, {:.1}s",
            succeeded,
            total,
            failed,
            total,
            start_time.elapsed().as_secs_f64()
        );
    }

    if failed == 0 {
        exit_codes::SUCCESS
    } else if succeeded > 0 {
        exit_codes::PARTIAL_FAILURE
    } else {
        exit_codes::EXECUTION_ERROR
    }
}

fn output_path_for(dir: &str, source: &str) -> PathBuf {
    let stem = Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    Path::new(dir).join(format!("{}_gaze.json", stem))
}

/// Like [`output_path_for`], but numbers the name when an earlier file in the
/// batch already claimed it (`a/run.csv` and `b/run.csv`).
fn unique_output_path(dir: &str, source: &str, taken: &mut HashSet<PathBuf>) -> PathBuf {
    let first = output_path_for(dir, source);
    if taken.insert(first.clone()) {
        return first;
    }

    let stem = Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let mut n = 2usize;
    loop {
        let candidate = Path::new(dir).join(format!("{}_{}_gaze.json", stem, n));
        if taken.insert(candidate.clone()) {
            log::warn!(
                "{} shares its output name with an earlier file, writing {}",
                source,
                candidate.display()
            );
            return candidate;
        }
        n += 1;
    }
}

fn resolve_files(args: &BatchArgs) -> Result<Vec<String>, String> {
    if let Some(ref pattern) = args.glob {
        resolve_glob(pattern)
    } else if let Some(ref files) = args.files {
        Ok(files.clone())
    } else {
        Err("One of --glob or --files must be specified".to_string())
    }
}

fn resolve_glob(pattern: &str) -> Result<Vec<String>, String> {
    let paths = glob::glob(pattern)
        .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

    let mut files: Vec<String> = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    if let Some(s) = path.to_str() {
                        files.push(s.to_string());
                    }
                }
            }
            Err(e) => log::warn!("glob error: {}", e),
        }
    }
    files.sort();
    Ok(files)
}
