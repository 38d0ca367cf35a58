use std::collections::HashMap;

use crate::domain::document::{DocId, DocumentStore, DocumentVector, TermId};
use crate::errors::CandidateResult;
use crate::repository::{DocumentReader, FileRepository, for_each_line};

/// Parses `<docId>\t<term:weight> <term:weight> ...`.
///
/// A repeated term keeps its last weight. Weights must be finite and
/// non-negative.
pub fn parse_document_line(line: &str) -> Result<(DocId, DocumentVector), String> {
    let line = line.trim();
    let (id, terms) = line
        .split_once('\t')
        .ok_or_else(|| "expected `<docId>\\t<term:weight> ...`".to_string())?;

    let id = id
        .trim()
        .parse::<DocId>()
        .map_err(|e| format!("invalid document id `{id}`: {e}"))?;

    let mut weights = HashMap::new();
    for token in terms.split_ascii_whitespace() {
        let (term, weight) = token
            .split_once(':')
            .ok_or_else(|| format!("expected `term:weight`, got `{token}`"))?;
        let term = term
            .parse::<TermId>()
            .map_err(|e| format!("invalid term id `{term}`: {e}"))?;
        let weight = weight
            .parse::<f64>()
            .map_err(|e| format!("invalid weight `{weight}`: {e}"))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(format!(
                "weight of term {term} must be finite and non-negative, got {weight}"
            ));
        }
        weights.insert(term, weight);
    }

    if weights.is_empty() {
        return Err(format!("document {id} has no terms"));
    }

    Ok((id, DocumentVector::new(weights)))
}

impl DocumentReader for FileRepository {
    fn load_documents(&self) -> CandidateResult<DocumentStore> {
        let mut store = DocumentStore::new();

        for_each_line(&self.documents_path, |line| {
            let (id, vector) = parse_document_line(line)?;
            if store.insert(id, vector).is_some() {
                log::warn!(
                    "Document {id} appears more than once in {}; keeping the last vector",
                    self.documents_path.display()
                );
            }
            Ok(())
        })?;

        log::info!(
            "Loaded {} document vectors from {}",
            store.len(),
            self.documents_path.display()
        );

        Ok(store)
    }
}
