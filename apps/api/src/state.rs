use crate::config::Config;
use crate::matching::ranker::RankOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Ranking knobs used when a request leaves them out.
    pub rank_defaults: RankOptions,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            rank_defaults: config.rank_defaults(),
        }
    }
}
