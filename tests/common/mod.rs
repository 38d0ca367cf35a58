//! Helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tfidf_candidates::models::config::CandidateConfig;
use tfidf_candidates::processing::similarity::ZeroNormPolicy;

pub const SCENARIO_DOCUMENTS: &str = "1\t10:2.0 20:1.0\n2\t10:2.0 20:1.0\n3\t30:5.0\n";

/// Temporary directory holding input and output files of one run.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new(links: &str, documents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir.");
        fs::write(dir.path().join("links.txt"), links).expect("Failed to write links.");
        fs::write(dir.path().join("documentTFIDF.txt"), documents)
            .expect("Failed to write documents.");
        TestWorkspace { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("Failed to read output file.")
    }

    pub fn config(&self, thresholds: Vec<f64>) -> CandidateConfig {
        CandidateConfig {
            links_path: self.file("links.txt"),
            documents_path: self.file("documentTFIDF.txt"),
            output_dir: self.path().to_path_buf(),
            output_prefix: "candidates".to_string(),
            thresholds,
            progress_interval: 1,
            report_path: None,
            zero_norm: ZeroNormPolicy::Zero,
        }
    }
}
