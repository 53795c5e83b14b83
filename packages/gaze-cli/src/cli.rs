use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gazelab",
    version,
    about = "Eye-movement analysis command-line tool",
    long_about = "Run eye-movement analysis on recorded gaze runs (JSON or CSV).\n\
                  Each run is segmented into fixations and saccades, scored for\n\
                  tracking quality and given a Low/Medium/High risk label."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a single recorded run
    Analyze(AnalyzeArgs),
    /// Analyze many recorded runs
    Batch(BatchArgs),
    /// Check a recording without analyzing it
    Validate(ValidateArgs),
    /// Show version and calibration constants
    Info(InfoArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input run (JSON, CSV/TSV/TXT)
    #[arg(long)]
    pub file: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print only the analysis result, without the report envelope
    #[arg(long, default_value_t = false)]
    pub result_only: bool,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern selecting input runs (e.g. "runs/*.json")
    #[arg(long, conflicts_with = "files")]
    pub glob: Option<String>,

    /// Explicit list of input runs
    #[arg(long, num_args = 1..)]
    pub files: Option<Vec<String>>,

    /// Write one <stem>_gaze.json per run here instead of JSONL on stdout
    #[arg(long, env = "GAZELAB_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    /// Keep going after a run fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// List the matching runs and exit
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Input run
    #[arg(long)]
    pub file: String,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
