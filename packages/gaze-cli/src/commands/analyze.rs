use crate::cli::AnalyzeArgs;
use crate::exit_codes;
use crate::input;
use crate::output;
use gaze_rs::AnalysisReport;
use std::path::Path;

pub fn execute(args: AnalyzeArgs) -> i32 {
    let samples = match input::load_run(&args.file) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if !args.quiet {
        eprintln!("Analyzing {} ({} samples)...", args.file, samples.len());
    }

    let report = AnalysisReport::from_samples(&samples).with_source(args.file.clone());

    if !args.quiet {
        eprintln!(
            "  {} fixations, {} saccades -> {} (score {:.3})",
            report.result.fixations.len(),
            report.result.saccades.len(),
            report.result.risk_assessment,
            report.breakdown.score
        );
    }

    let output_path = args.output.as_deref().map(Path::new);
    let written = if args.result_only {
        output::emit(&report.result, args.compact, output_path)
    } else {
        output::emit(&report, args.compact, output_path)
    };

    if let Err(e) = written {
        eprintln!("Error: {}", e);
        return exit_codes::EXECUTION_ERROR;
    }

    if !args.quiet {
        if let Some(ref path) = args.output {
            eprintln!("Results written to {}", path);
        }
    }

    exit_codes::SUCCESS
}
