use crate::config::Config;
use crate::matching::ranking::RankingOptions;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The engine keeps no state between runs; only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Ranking options for one run: the request's limit if given, else the configured default.
    pub fn ranking_options(&self, matched_terms_limit: Option<usize>) -> RankingOptions {
        RankingOptions {
            matched_terms_limit: matched_terms_limit.unwrap_or(self.config.matched_terms_limit),
        }
    }
}
