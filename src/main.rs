use std::env;
use std::path::PathBuf;

use tfidf_candidates::models::config::CandidateConfig;
use tfidf_candidates::processing::run;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_file = env::args()
        .nth(1)
        .or_else(|| env::var("CANDIDATES_CONFIG").ok())
        .map(PathBuf::from);

    let config = match CandidateConfig::load(config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(summary) => log::info!(
            "Finished candidate generation: {} pairs evaluated, {} output files",
            summary.stats.pairs_evaluated,
            summary.candidate_files.len()
        ),
        Err(e) => {
            log::error!("Candidate generation failed: {e}");
            std::process::exit(1);
        }
    }
}
