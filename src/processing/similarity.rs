use serde::Deserialize;

use crate::domain::document::{DocId, DocumentStore, DocumentVector};
use crate::errors::{CandidateError, CandidateResult};

/// How a similarity involving a zero-norm document is resolved.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZeroNormPolicy {
    /// The similarity is `0.0`.
    #[default]
    Zero,
    /// The similarity is an [`CandidateError::UndefinedSimilarity`] error.
    Reject,
}

/// Dot product over the shared terms of two sparse vectors.
///
/// Iterates the vector with fewer terms and probes the other, so the cost is
/// `O(min(|a|, |b|))`.
pub fn sparse_dot(a: &DocumentVector, b: &DocumentVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .weights()
        .iter()
        .filter_map(|(term, weight)| large.weight(*term).map(|other| weight * other))
        .sum()
}

/// Cosine similarity of two vectors.
///
/// Returns `None` when either vector has a zero norm.
pub fn cosine(a: &DocumentVector, b: &DocumentVector) -> Option<f64> {
    let denominator = (a.squared_norm() * b.squared_norm()).sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some((sparse_dot(a, b) / denominator).min(1.0))
}

/// Cosine similarity of two stored documents.
///
/// The pair is evaluated in ascending id order so `(a, b)` and `(b, a)`
/// produce bit-identical results.
pub fn cosine_similarity(
    store: &DocumentStore,
    a: DocId,
    b: DocId,
    policy: ZeroNormPolicy,
) -> CandidateResult<f64> {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let left = store
        .get(a)
        .ok_or(CandidateError::UnknownDocument { id: a })?;
    let right = store
        .get(b)
        .ok_or(CandidateError::UnknownDocument { id: b })?;

    match cosine(left, right) {
        Some(similarity) => Ok(similarity),
        None => match policy {
            ZeroNormPolicy::Zero => Ok(0.0),
            ZeroNormPolicy::Reject => {
                let id = if left.squared_norm() == 0.0 { a } else { b };
                Err(CandidateError::UndefinedSimilarity { id })
            }
        },
    }
}
