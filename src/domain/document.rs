use std::collections::{BTreeMap, HashMap};

pub type DocId = u64;
pub type TermId = u64;

/// Sparse TF-IDF vector of a single document.
///
/// Only non-zero terms are expected, but explicit zero weights are kept as
/// given. The squared L2 norm is computed once on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentVector {
    weights: HashMap<TermId, f64>,
    squared_norm: f64,
}

impl DocumentVector {
    pub fn new(weights: HashMap<TermId, f64>) -> Self {
        let squared_norm = weights.values().map(|w| w * w).sum();
        Self {
            weights,
            squared_norm,
        }
    }

    pub fn weight(&self, term: TermId) -> Option<f64> {
        self.weights.get(&term).copied()
    }

    pub fn weights(&self) -> &HashMap<TermId, f64> {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of squared weights.
    pub fn squared_norm(&self) -> f64 {
        self.squared_norm
    }
}

impl FromIterator<(TermId, f64)> for DocumentVector {
    fn from_iter<I: IntoIterator<Item = (TermId, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// All document vectors of a run, keyed by document id in ascending order.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    vectors: BTreeMap<DocId, DocumentVector>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vector, returning the one previously stored under `id`.
    pub fn insert(&mut self, id: DocId, vector: DocumentVector) -> Option<DocumentVector> {
        self.vectors.insert(id, vector)
    }

    pub fn get(&self, id: DocId) -> Option<&DocumentVector> {
        self.vectors.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.vectors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &DocumentVector)> {
        self.vectors.iter().map(|(id, vector)| (*id, vector))
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Ids of documents whose vector has a zero norm.
    pub fn zero_norm_ids(&self) -> Vec<DocId> {
        self.iter()
            .filter(|(_, vector)| vector.squared_norm() == 0.0)
            .map(|(id, _)| id)
            .collect()
    }
}

impl FromIterator<(DocId, DocumentVector)> for DocumentStore {
    fn from_iter<I: IntoIterator<Item = (DocId, DocumentVector)>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}
