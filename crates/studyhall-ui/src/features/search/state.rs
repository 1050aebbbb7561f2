//! Search state transitions.

use crate::core::config::PortalConfig;
use studyhall_api_models::MaterialSummary;

/// Progress of the latest query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// No query issued.
    #[default]
    Idle,
    /// Waiting for the backend.
    Loading,
    /// Results for the latest query are shown.
    Ready,
    /// The latest query failed.
    Failed,
}

/// What the search box should do after a debounced change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// Query too short; results were cleared locally.
    Skip,
    /// Send the query, tagged with its generation.
    Fetch {
        /// Generation to hand back with the results.
        generation: u64,
        /// Trimmed query text.
        query: String,
    },
}

/// Search slice of the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Last debounced query, exactly as typed.
    pub query: String,
    /// Results of the latest completed query.
    pub results: Vec<MaterialSummary>,
    /// Status of the latest query.
    pub status: SearchStatus,
    generation: u64,
}

impl SearchState {
    /// Register a debounced query.
    pub fn begin(&mut self, query: &str) -> SearchStep {
        self.query = query.to_string();
        let trimmed = query.trim();
        self.generation += 1;
        if trimmed.chars().count() < PortalConfig::DEFAULT.min_search_chars {
            self.results.clear();
            self.status = SearchStatus::Idle;
            return SearchStep::Skip;
        }
        self.status = SearchStatus::Loading;
        SearchStep::Fetch {
            generation: self.generation,
            query: trimmed.to_string(),
        }
    }

    /// Store results when they belong to the latest query.
    pub fn apply(&mut self, generation: u64, results: Vec<MaterialSummary>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results = results;
        self.status = SearchStatus::Ready;
        true
    }

    /// Mark the latest query as failed.
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results.clear();
        self.status = SearchStatus::Failed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhall_api_models::MaterialId;

    fn hit(name: &str) -> MaterialSummary {
        MaterialSummary {
            material_id: MaterialId::from(name),
            material_name: name.to_string(),
            material_link: String::new(),
            category: None,
            subject: None,
        }
    }

    #[test]
    fn short_queries_skip_the_backend() {
        let mut state = SearchState::default();
        assert_eq!(state.begin(" a "), SearchStep::Skip);
        assert_eq!(state.status, SearchStatus::Idle);
    }

    #[test]
    fn fetch_carries_trimmed_query() {
        let mut state = SearchState::default();
        match state.begin("  algebra ") {
            SearchStep::Fetch { query, .. } => assert_eq!(query, "algebra"),
            SearchStep::Skip => panic!("expected fetch"),
        }
        assert_eq!(state.status, SearchStatus::Loading);
    }

    #[test]
    fn typed_query_is_kept_verbatim_for_display() {
        let mut state = SearchState::default();
        match state.begin("linear ") {
            SearchStep::Fetch { query, .. } => assert_eq!(query, "linear"),
            SearchStep::Skip => panic!("expected fetch"),
        }
        assert_eq!(state.query, "linear ");
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut state = SearchState::default();
        let SearchStep::Fetch { generation: old, .. } = state.begin("alg") else {
            panic!("expected fetch");
        };
        let SearchStep::Fetch { generation: new, .. } = state.begin("algebra") else {
            panic!("expected fetch");
        };

        assert!(!state.apply(old, vec![hit("stale")]));
        assert!(state.results.is_empty());
        assert!(state.apply(new, vec![hit("Algebra")]));
        assert_eq!(state.results[0].material_name, "Algebra");
        assert_eq!(state.status, SearchStatus::Ready);
        assert!(!state.fail(old));
    }

    #[test]
    fn shortening_the_query_invalidates_in_flight_results() {
        let mut state = SearchState::default();
        let SearchStep::Fetch { generation, .. } = state.begin("bio") else {
            panic!("expected fetch");
        };
        assert_eq!(state.begin(""), SearchStep::Skip);
        assert!(!state.apply(generation, vec![hit("Biology")]));
        assert!(state.results.is_empty());
    }
}
