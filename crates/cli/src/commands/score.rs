//! Score prediction files against a gold file.
//!
//! Missing inputs and an unreadable gold file abort the run. Problems with an
//! individual prediction file are logged and that file is skipped.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use hate_scorer_application::{
    check_format_as, evaluate_subtask, read_gold_file, read_labels,
    read_prediction_file, validate_files, FileRole,
};
use hate_scorer_domain::{LabelSet, ScoreReport, ScorerError, Subtask};
use serde::Serialize;
use tracing::{debug, error, info};

use super::CommandContext;

/// Inputs of a scoring run
#[derive(Debug, Clone)]
pub struct ScoreArgs {
    pub pred_files: Vec<PathBuf>,
    pub gold_file: PathBuf,
    /// Overrides the subtask named in the file names
    pub subtask: Option<Subtask>,
}

/// Outcome for one prediction file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    Scored { report: ScoreReport },
    Skipped { code: String, reason: String },
}

/// One prediction file and its outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileScore {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileScore {
    pub fn report(&self) -> Option<&ScoreReport> {
        match &self.outcome {
            FileOutcome::Scored { report } => Some(report),
            FileOutcome::Skipped { .. } => None,
        }
    }
}

/// Results of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub gold_file: PathBuf,
    pub scored_at: DateTime<Utc>,
    pub files: Vec<FileScore>,
    #[serde(skip)]
    pub decimals: usize,
}

impl ScoreSummary {
    pub fn scored(&self) -> usize {
        self.files.iter().filter(|f| f.report().is_some()).count()
    }

    pub fn skipped(&self) -> usize {
        self.files.len() - self.scored()
    }
}

/// Run the scorer over every prediction file.
pub fn run(ctx: &CommandContext, args: &ScoreArgs) -> Result<ScoreSummary> {
    if !validate_files(&args.pred_files) {
        bail!("One or more prediction files don't exist");
    }
    if !validate_files(&[&args.gold_file]) {
        bail!("File doesn't exist: {}", args.gold_file.display());
    }
    info!("All files exist!");

    let gold = read_gold(&args.gold_file, args.subtask)
        .with_context(|| format!("Failed to read gold file {}", args.gold_file.display()))?;
    debug!(subtask = %gold.subtask(), labels = gold.len(), "Loaded gold labels");

    let decimals = ctx.config.decimals;
    let mut files = Vec::with_capacity(args.pred_files.len());

    for path in &args.pred_files {
        info!("Checking file: {}", path.display());
        let outcome = match score_file(ctx, path, &gold, args.subtask) {
            Ok(report) => {
                info!("{}", report.metrics.format_line(decimals));
                for dimension in &report.dimensions {
                    debug!(
                        "{}: {}",
                        dimension.dimension,
                        dimension.metrics.format_line(decimals)
                    );
                }
                FileOutcome::Scored { report }
            }
            Err(err) => {
                error!("Skipping {}: {}", path.display(), err);
                FileOutcome::Skipped {
                    code: err.error_code().to_string(),
                    reason: err.to_string(),
                }
            }
        };
        files.push(FileScore {
            path: path.clone(),
            outcome,
        });
    }

    Ok(ScoreSummary {
        gold_file: args.gold_file.clone(),
        scored_at: Utc::now(),
        files,
        decimals,
    })
}

fn read_gold(path: &Path, subtask: Option<Subtask>) -> Result<LabelSet, ScorerError> {
    match subtask {
        Some(subtask) => read_labels(path, subtask, FileRole::Gold),
        None => read_gold_file(path),
    }
}

fn score_file(
    ctx: &CommandContext,
    path: &Path,
    gold: &LabelSet,
    subtask: Option<Subtask>,
) -> Result<ScoreReport, ScorerError> {
    if ctx.config.strict_format && !check_format_as(path, subtask) {
        return Err(ScorerError::FormatRejected(path.to_path_buf()));
    }

    info!("Scoring run: {}", path.display());
    let predictions = match subtask {
        Some(subtask) => read_labels(path, subtask, FileRole::Prediction)?,
        None => read_prediction_file(path)?,
    };

    evaluate_subtask(predictions.subtask(), &predictions, gold)
}
