pub mod domain;
pub mod errors;
pub mod models;
pub mod processing;
pub mod repository;

/// Similarity cutoff used when no thresholds are configured.
pub const DEFAULT_THRESHOLD: f64 = 0.1;
