//! Hate speech shared task scorer
//!
//! Scores one or more prediction files against a gold file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use hate_scorer_cli::commands::{score, CommandContext};
use hate_scorer_cli::output::{colors, Formattable, OutputFormat};
use hate_scorer_cli::ScoreArgs;
use hate_scorer_common::{init_tracing, ScorerConfig};
use hate_scorer_domain::Subtask;

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hate-scorer")]
#[command(author, version, about = "Scorer for the hate speech detection shared task")]
#[command(long_about = "Scores prediction files for subtasks 1A, 1B and 1C against a gold file.\n\n\
    The subtask is taken from the file names (subtask_1A, subtask_1B or subtask_1C) \
    unless --subtask is given.")]
struct Cli {
    /// Paths to the files you want to score
    #[arg(short = 'p', long = "pred_files_path", required = true, num_args = 1..)]
    pred_files_path: Vec<PathBuf>,

    /// Path to the file with gold annotations
    #[arg(short = 'g', long = "gold_file_path", required = true)]
    gold_file_path: PathBuf,

    /// Subtask layout to use instead of the one named in the file names
    #[arg(short = 's', long)]
    subtask: Option<Subtask>,

    /// Print a summary of all files to stdout
    #[arg(short = 'o', long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), e);
        if cli.verbose {
            eprintln!("\n{}", colors::dim("Caused by:"));
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = ScorerConfig::load(cli.config.as_deref()).context("Invalid configuration")?;
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    init_tracing(&config.log_level, config.json_logging)?;

    let ctx = CommandContext::new(config, cli.format.map(Into::into));
    let args = ScoreArgs {
        pred_files: cli.pred_files_path.clone(),
        gold_file: cli.gold_file_path.clone(),
        subtask: cli.subtask,
    };

    let summary = score::run(&ctx, &args)?;

    if let Some(format) = ctx.output_format {
        println!("{}", summary.format(format)?);

        if format != OutputFormat::Json {
            let scored = format!("{} scored", summary.scored());
            let skipped = format!("{} skipped", summary.skipped());
            eprintln!(
                "{}, {}",
                colors::success(&scored),
                if summary.skipped() > 0 {
                    colors::error(&skipped)
                } else {
                    colors::dim(&skipped)
                }
            );
        }
    }

    Ok(())
}
