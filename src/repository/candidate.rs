use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::link::CandidateEdge;
use crate::errors::{CandidateError, CandidateResult};
use crate::repository::CandidateWriter;

/// One buffered output file written under a `.partial` name.
struct PendingFile {
    final_path: PathBuf,
    partial_path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl PendingFile {
    fn create(final_path: &Path) -> CandidateResult<Self> {
        let mut partial = final_path.as_os_str().to_owned();
        partial.push(".partial");
        let partial_path = PathBuf::from(partial);

        let file = File::create(&partial_path).map_err(|e| CandidateError::io(&partial_path, e))?;

        Ok(Self {
            final_path: final_path.to_path_buf(),
            partial_path,
            writer: Some(BufWriter::new(file)),
        })
    }

    fn write_edge(&mut self, edge: CandidateEdge) -> CandidateResult<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        writeln!(writer, "{}\t{}", edge.source, edge.target)
            .map_err(|e| CandidateError::io(&self.partial_path, e))
    }

    fn commit(&mut self) -> CandidateResult<()> {
        if let Some(writer) = self.writer.take() {
            writer
                .into_inner()
                .map_err(|e| CandidateError::io(&self.partial_path, e.into_error()))?
                .sync_all()
                .map_err(|e| CandidateError::io(&self.partial_path, e))?;
            fs::rename(&self.partial_path, &self.final_path)
                .map_err(|e| CandidateError::io(&self.final_path, e))?;
        }
        Ok(())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if self.writer.take().is_some() {
            fs::remove_file(&self.partial_path).ok();
        }
    }
}

/// Candidate outputs for every threshold of a run.
///
/// Edges are buffered into `<path>.partial` files that only replace the
/// final paths on [`CandidateFiles::commit`]. Dropping the set without
/// committing removes the partial files.
pub struct CandidateFiles {
    files: Vec<PendingFile>,
}

impl CandidateFiles {
    pub fn create(paths: &[PathBuf]) -> CandidateResult<Self> {
        let files = paths
            .iter()
            .map(|path| PendingFile::create(path))
            .collect::<CandidateResult<Vec<_>>>()?;
        Ok(Self { files })
    }

    /// Flushes every file and moves it to its final name.
    pub fn commit(mut self) -> CandidateResult<Vec<PathBuf>> {
        for file in &mut self.files {
            file.commit()?;
        }
        Ok(self.files.iter().map(|f| f.final_path.clone()).collect())
    }
}

impl CandidateWriter for CandidateFiles {
    fn write_edge(&mut self, threshold_index: usize, edge: CandidateEdge) -> CandidateResult<()> {
        match self.files.get_mut(threshold_index) {
            Some(file) => file.write_edge(edge),
            None => Err(CandidateError::InvalidConfig(format!(
                "no candidate output for threshold index {threshold_index}"
            ))),
        }
    }
}
