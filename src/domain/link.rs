use crate::domain::document::DocId;

/// A known relation between two documents, used for recall evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrueLink {
    pub source: DocId,
    pub target: DocId,
}

impl TrueLink {
    pub fn new(source: DocId, target: DocId) -> Self {
        Self { source, target }
    }
}

/// A document pair that survived threshold pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateEdge {
    pub source: DocId,
    pub target: DocId,
}

impl CandidateEdge {
    pub fn new(source: DocId, target: DocId) -> Self {
        Self { source, target }
    }
}
