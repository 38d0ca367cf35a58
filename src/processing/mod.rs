use std::fs;
use std::path::PathBuf;

use crate::errors::{CandidateError, CandidateResult};
use crate::models::config::CandidateConfig;
use crate::processing::candidate::{CandidateStats, generate_candidates};
use crate::processing::recall::{RecallReport, evaluate_recall};
use crate::repository::candidate::CandidateFiles;
use crate::repository::{DocumentReader, FileRepository, LinkReader};

pub mod candidate;
pub mod recall;
pub mod similarity;

/// Outcome of a complete run.
#[derive(Debug)]
pub struct RunSummary {
    pub report: RecallReport,
    pub stats: CandidateStats,
    pub candidate_files: Vec<PathBuf>,
}

/// Loads the inputs, evaluates recall and writes the candidate files.
pub fn run(config: &CandidateConfig) -> CandidateResult<RunSummary> {
    config.validate()?;

    let repo = FileRepository::new(&config.links_path, &config.documents_path);
    run_with(config, &repo)
}

/// Same as [`run`] with explicit input readers.
pub fn run_with<R>(config: &CandidateConfig, repo: &R) -> CandidateResult<RunSummary>
where
    R: DocumentReader + LinkReader,
{
    let links = repo.load_links()?;
    let store = repo.load_documents()?;
    if store.is_empty() {
        return Err(CandidateError::EmptyInput("document set"));
    }

    let zero_norm = store.zero_norm_ids();
    if !zero_norm.is_empty() {
        log::warn!(
            "{} documents have a zero norm and are resolved with policy {:?}: {:?}",
            zero_norm.len(),
            config.zero_norm,
            zero_norm
        );
    }

    let report = evaluate_recall(&store, &links, &config.thresholds, config.zero_norm)?;
    report.log();

    let mut files = CandidateFiles::create(&config.candidate_paths())?;
    let stats = generate_candidates(
        &store,
        &config.thresholds,
        config.zero_norm,
        &mut files,
        config.progress_interval,
    )?;
    let candidate_files = files.commit()?;

    for (path, edges) in candidate_files.iter().zip(&stats.edges_per_threshold) {
        log::info!("Wrote {edges} candidate edges to {}", path.display());
    }

    // A failed run must not leave a report.
    if let Some(path) = &config.report_path {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).map_err(|e| CandidateError::io(path, e))?;
        log::info!("Wrote recall report to {}", path.display());
    }

    Ok(RunSummary {
        report,
        stats,
        candidate_files,
    })
}
