//! Configuration model loaded from external sources.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::DEFAULT_THRESHOLD;
use crate::errors::{CandidateError, CandidateResult};
use crate::processing::similarity::ZeroNormPolicy;

/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "CANDIDATES";

#[derive(Clone, Debug, Deserialize)]
/// Input paths, thresholds and output layout of a candidate run.
pub struct CandidateConfig {
    pub links_path: PathBuf,
    pub documents_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_prefix: String,
    #[serde(deserialize_with = "deserialize_thresholds")]
    pub thresholds: Vec<f64>,
    /// Number of outer rows between progress lines; `0` disables them.
    pub progress_interval: usize,
    #[serde(default)]
    pub report_path: Option<PathBuf>,
    pub zero_norm: ZeroNormPolicy,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThresholdValue {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThresholdList {
    Many(Vec<ThresholdValue>),
    One(ThresholdValue),
}

/// Accepts a list, a single number or a comma-separated string.
///
/// An environment value without a comma reaches the deserializer as a
/// scalar, so `CANDIDATES_THRESHOLDS=0.5` must still yield `[0.5]`.
fn deserialize_thresholds<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match ThresholdList::deserialize(deserializer)? {
        ThresholdList::Many(values) => values,
        ThresholdList::One(value) => vec![value],
    };

    let mut thresholds = Vec::with_capacity(values.len());
    for value in values {
        match value {
            ThresholdValue::Number(threshold) => thresholds.push(threshold),
            ThresholdValue::Text(text) => {
                for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    let threshold = part.parse::<f64>().map_err(|e| {
                        serde::de::Error::custom(format!("invalid threshold `{part}`: {e}"))
                    })?;
                    thresholds.push(threshold);
                }
            }
        }
    }
    Ok(thresholds)
}

impl CandidateConfig {
    /// Builds the configuration from defaults, an optional YAML file and
    /// `CANDIDATES_*` environment variables, in increasing priority.
    pub fn load(file: Option<&Path>) -> CandidateResult<Self> {
        let mut builder = config::Config::builder()
            .set_default("links_path", "links.txt")?
            .set_default("documents_path", "documentTFIDF.txt")?
            .set_default("output_dir", ".")?
            .set_default("output_prefix", "candidates")?
            .set_default("thresholds", vec![DEFAULT_THRESHOLD])?
            .set_default("progress_interval", 1000_u64)?
            .set_default("zero_norm", "zero")?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("thresholds"),
            )
            .build()?;

        let config: CandidateConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks thresholds and the output prefix.
    pub fn validate(&self) -> CandidateResult<()> {
        if self.thresholds.is_empty() {
            return Err(CandidateError::InvalidConfig(
                "at least one threshold is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for &threshold in &self.thresholds {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                return Err(CandidateError::InvalidConfig(format!(
                    "threshold {threshold} is outside [0, 1]"
                )));
            }
            if !seen.insert(threshold.to_bits()) {
                return Err(CandidateError::InvalidConfig(format!(
                    "threshold {threshold} is listed more than once"
                )));
            }
        }

        if self.output_prefix.trim().is_empty() {
            return Err(CandidateError::InvalidConfig(
                "output prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Output file for each threshold, in threshold order.
    ///
    /// A single threshold writes `<prefix>.txt`; several write
    /// `<prefix>.<threshold>.txt`.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        if let [_] = self.thresholds.as_slice() {
            return vec![self.output_dir.join(format!("{}.txt", self.output_prefix))];
        }
        self.thresholds
            .iter()
            .map(|threshold| {
                self.output_dir
                    .join(format!("{}.{threshold}.txt", self.output_prefix))
            })
            .collect()
    }
}
