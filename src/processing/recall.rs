use serde::Serialize;

use crate::domain::document::DocumentStore;
use crate::domain::link::TrueLink;
use crate::errors::{CandidateError, CandidateResult};
use crate::processing::similarity::{ZeroNormPolicy, cosine_similarity};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThresholdRecall {
    pub threshold: f64,
    /// True links whose similarity is strictly above the threshold.
    pub retained: usize,
    pub recall: f64,
}

/// Similarity statistics of the true links and recall per threshold.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecallReport {
    pub link_count: usize,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    pub recalls: Vec<ThresholdRecall>,
}

impl RecallReport {
    pub fn log(&self) {
        log::info!("max similarity of true links: {:.6}", self.max);
        log::info!("min similarity of true links: {:.6}", self.min);
        log::info!("average similarity of true links: {:.6}", self.mean);
        for entry in &self.recalls {
            log::info!(
                "recall of pruning at {}: {:.6} ({} of {})",
                entry.threshold,
                entry.recall,
                entry.retained,
                self.link_count
            );
        }
    }
}

/// Similarities of `links` in link order.
pub fn true_link_similarities(
    store: &DocumentStore,
    links: &[TrueLink],
    policy: ZeroNormPolicy,
) -> CandidateResult<Vec<f64>> {
    links
        .iter()
        .map(|link| cosine_similarity(store, link.source, link.target, policy))
        .collect()
}

/// Evaluates how many true links each threshold would retain.
pub fn evaluate_recall(
    store: &DocumentStore,
    links: &[TrueLink],
    thresholds: &[f64],
    policy: ZeroNormPolicy,
) -> CandidateResult<RecallReport> {
    if links.is_empty() {
        return Err(CandidateError::EmptyInput("true links"));
    }

    let similarities = true_link_similarities(store, links, policy)?;

    let max = similarities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = similarities.iter().copied().fold(f64::INFINITY, f64::min);
    let mean = similarities.iter().sum::<f64>() / similarities.len() as f64;

    let recalls = thresholds
        .iter()
        .map(|&threshold| {
            let retained = similarities.iter().filter(|&&sim| sim > threshold).count();
            ThresholdRecall {
                threshold,
                retained,
                recall: retained as f64 / links.len() as f64,
            }
        })
        .collect();

    Ok(RecallReport {
        link_count: links.len(),
        max,
        min,
        mean,
        recalls,
    })
}
