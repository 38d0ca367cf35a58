//! All-pairs candidate generation.
//!
//! Every unordered pair of documents is scored once, so the pass costs
//! `n * (n + 1) / 2` similarity evaluations. There is no blocking index:
//! corpora must be small enough for the quadratic pass to finish.

use crate::domain::document::DocumentStore;
use crate::domain::link::CandidateEdge;
use crate::errors::CandidateResult;
use crate::processing::similarity::{ZeroNormPolicy, cosine_similarity};
use crate::repository::CandidateWriter;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateStats {
    pub pairs_evaluated: usize,
    /// Emitted edges per threshold, in threshold order.
    pub edges_per_threshold: Vec<usize>,
}

/// Scores all document pairs and writes the edges above each threshold.
///
/// For `a != b` a surviving pair is written as both `(a, b)` and `(b, a)`;
/// a document paired with itself is written once. Progress is logged every
/// `progress_interval` documents (`0` disables intermediate lines).
pub fn generate_candidates<W>(
    store: &DocumentStore,
    thresholds: &[f64],
    policy: ZeroNormPolicy,
    writer: &mut W,
    progress_interval: usize,
) -> CandidateResult<CandidateStats>
where
    W: CandidateWriter,
{
    let ids: Vec<_> = store.ids().collect();
    let total = ids.len();
    let mut stats = CandidateStats {
        pairs_evaluated: 0,
        edges_per_threshold: vec![0; thresholds.len()],
    };

    for (row, &a) in ids.iter().enumerate() {
        for &b in &ids[row..] {
            let similarity = cosine_similarity(store, a, b, policy)?;
            stats.pairs_evaluated += 1;

            for (index, &threshold) in thresholds.iter().enumerate() {
                if similarity <= threshold {
                    continue;
                }
                writer.write_edge(index, CandidateEdge::new(a, b))?;
                stats.edges_per_threshold[index] += 1;
                if a != b {
                    writer.write_edge(index, CandidateEdge::new(b, a))?;
                    stats.edges_per_threshold[index] += 1;
                }
            }
        }

        let finished = row + 1;
        if progress_interval > 0 && finished % progress_interval == 0 && finished < total {
            log::info!("finished {finished} of {total} documents");
        }
    }

    log::info!(
        "finished {total} of {total} documents ({} pairs evaluated)",
        stats.pairs_evaluated
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::generate_candidates;
    use crate::domain::document::{DocumentStore, DocumentVector};
    use crate::domain::link::CandidateEdge;
    use crate::errors::{CandidateError, CandidateResult};
    use crate::processing::similarity::ZeroNormPolicy;
    use crate::repository::CandidateWriter;

    #[derive(Default)]
    struct MemoryWriter {
        edges: Vec<Vec<CandidateEdge>>,
    }

    impl MemoryWriter {
        fn with_outputs(count: usize) -> Self {
            Self {
                edges: vec![Vec::new(); count],
            }
        }

        fn set(&self, index: usize) -> BTreeSet<(u64, u64)> {
            self.edges[index]
                .iter()
                .map(|edge| (edge.source, edge.target))
                .collect()
        }
    }

    impl CandidateWriter for MemoryWriter {
        fn write_edge(&mut self, index: usize, edge: CandidateEdge) -> CandidateResult<()> {
            self.edges[index].push(edge);
            Ok(())
        }
    }

    fn scenario_store() -> DocumentStore {
        [
            (1, DocumentVector::from_iter([(10, 2.0), (20, 1.0)])),
            (2, DocumentVector::from_iter([(10, 2.0), (20, 1.0)])),
            (3, DocumentVector::from_iter([(30, 5.0)])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn emits_symmetric_edges_and_single_self_edges() {
        let store = scenario_store();
        let mut writer = MemoryWriter::with_outputs(1);

        let stats = generate_candidates(&store, &[0.1], ZeroNormPolicy::Zero, &mut writer, 0)
            .expect("generation");

        assert_eq!(
            writer.edges[0],
            vec![
                CandidateEdge::new(1, 1),
                CandidateEdge::new(1, 2),
                CandidateEdge::new(2, 1),
                CandidateEdge::new(2, 2),
                CandidateEdge::new(3, 3),
            ]
        );
        assert_eq!(stats.pairs_evaluated, 6);
        assert_eq!(stats.edges_per_threshold, vec![5]);
    }

    #[test]
    fn lower_threshold_yields_superset() {
        let store: DocumentStore = [
            (1, DocumentVector::from_iter([(10, 2.0), (20, 1.0)])),
            (2, DocumentVector::from_iter([(10, 1.0), (30, 1.0)])),
            (3, DocumentVector::from_iter([(20, 1.0), (30, 4.0)])),
            (4, DocumentVector::from_iter([(40, 1.0)])),
        ]
        .into_iter()
        .collect();
        let thresholds = [0.0, 0.2, 0.5, 0.9];
        let mut writer = MemoryWriter::with_outputs(thresholds.len());

        generate_candidates(&store, &thresholds, ZeroNormPolicy::Zero, &mut writer, 1)
            .expect("generation");

        for index in 1..thresholds.len() {
            assert!(writer.set(index).is_subset(&writer.set(index - 1)));
        }
        assert!(writer.set(0).len() > writer.set(3).len());
    }

    #[test]
    fn every_emitted_edge_has_its_mirror() {
        let store = scenario_store();
        let mut writer = MemoryWriter::with_outputs(1);

        generate_candidates(&store, &[0.0], ZeroNormPolicy::Zero, &mut writer, 0)
            .expect("generation");

        let edges = writer.set(0);
        for &(a, b) in &edges {
            assert!(edges.contains(&(b, a)));
        }
    }

    #[test]
    fn zero_norm_document_aborts_when_rejected() {
        let mut store = scenario_store();
        store.insert(4, DocumentVector::from_iter([(10, 0.0)]));
        let mut writer = MemoryWriter::with_outputs(1);

        let result = generate_candidates(&store, &[0.1], ZeroNormPolicy::Reject, &mut writer, 0);

        assert!(matches!(
            result,
            Err(CandidateError::UndefinedSimilarity { id: 4 })
        ));
    }

    #[test]
    fn zero_norm_document_gets_no_edges_by_default() {
        let mut store = scenario_store();
        store.insert(4, DocumentVector::from_iter([(10, 0.0)]));
        let mut writer = MemoryWriter::with_outputs(1);

        generate_candidates(&store, &[0.0], ZeroNormPolicy::Zero, &mut writer, 0)
            .expect("generation");

        assert!(writer.set(0).iter().all(|&(a, b)| a != 4 && b != 4));
    }
}
