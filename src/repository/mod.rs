use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::domain::document::DocumentStore;
use crate::domain::link::{CandidateEdge, TrueLink};
use crate::errors::{CandidateError, CandidateResult};

pub mod candidate;
pub mod document;
pub mod link;

pub trait DocumentReader {
    fn load_documents(&self) -> CandidateResult<DocumentStore>;
}

pub trait LinkReader {
    fn load_links(&self) -> CandidateResult<Vec<TrueLink>>;
}

/// Sink for candidate edges, one output per configured threshold.
pub trait CandidateWriter {
    /// Writes `edge` to the output of the threshold at `threshold_index`.
    fn write_edge(&mut self, threshold_index: usize, edge: CandidateEdge) -> CandidateResult<()>;
}

/// Reads tab-delimited input files from disk.
#[derive(Clone, Debug)]
pub struct FileRepository {
    links_path: PathBuf,
    documents_path: PathBuf,
}

impl FileRepository {
    pub fn new(links_path: impl Into<PathBuf>, documents_path: impl Into<PathBuf>) -> Self {
        Self {
            links_path: links_path.into(),
            documents_path: documents_path.into(),
        }
    }
}

/// Feeds every non-blank line of `path` with its 1-based number to `handle`.
///
/// A parse failure returned by `handle` aborts the scan as
/// [`CandidateError::MalformedInput`].
pub(crate) fn for_each_line<F>(path: &Path, mut handle: F) -> CandidateResult<()>
where
    F: FnMut(&str) -> Result<(), String>,
{
    let file = File::open(path).map_err(|e| CandidateError::io(path, e))?;
    let reader = BufReader::new(file);

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CandidateError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        handle(&line).map_err(|reason| CandidateError::MalformedInput {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        })?;
    }

    Ok(())
}
